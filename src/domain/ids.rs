use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a listing (a priced item offered by a seller).
    ListingId
);
id_type!(
    /// Identifies a seller. Sellers are ordered by id when a shared discount
    /// is split between them.
    SellerId
);
id_type!(
    /// Identifies an accepted price negotiation.
    OfferId
);
id_type!(CampaignId);
