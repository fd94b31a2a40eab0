// SPDX-License-Identifier: MPL-2.0
//! Collection provider port definition.
//!
//! The host shell receives a provider at startup instead of reaching for
//! module-level data. The viewer itself never sees the provider; it only
//! receives the collections it returns.

use crate::domain::story::Collection;
use crate::error::Result;

/// Port for obtaining story collections.
pub trait CollectionProvider {
    /// Returns the collections in tray order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read.
    fn collections(&self) -> Result<Vec<Collection>>;
}

impl<P: CollectionProvider + ?Sized> CollectionProvider for Box<P> {
    fn collections(&self) -> Result<Vec<Collection>> {
        (**self).collections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::{MediaItem, Owner};

    struct Fixed;

    impl CollectionProvider for Fixed {
        fn collections(&self) -> Result<Vec<Collection>> {
            let collection = Collection::new(
                Owner::new("u1", "mira", "Mira"),
                vec![MediaItem::image("a", "a.jpg")],
            )?;
            Ok(vec![collection])
        }
    }

    #[test]
    fn boxed_provider_delegates() {
        let provider: Box<dyn CollectionProvider> = Box::new(Fixed);
        let collections = provider.collections().expect("fixed provider");
        assert_eq!(collections.len(), 1);
    }
}
