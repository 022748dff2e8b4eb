//! Enumerations passed through from the service.
//!
//! The service encodes enum values by name. Names this crate does not know
//! about are carried verbatim in `Other` rather than rejected, since the
//! values are only ever displayed.

use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value this crate has no variant for.
            Other(String),
        }

        impl $name {
            /// Maps a wire name to a variant.
            pub fn from_wire(name: &str) -> Self {
                match name {
                    $( $wire => Self::$variant, )*
                    other => Self::Other(other.to_string()),
                }
            }

            /// Returns the wire name.
            pub fn as_wire(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Other(name) => name,
                }
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::from_wire(name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_wire())
            }
        }
    };
}

wire_enum! {
    /// How a keyword criterion matches user search terms.
    pub enum KeywordMatchType {
        /// Not specified.
        #[default]
        Unspecified => "UNSPECIFIED",
        /// Value unknown in the requested API version.
        Unknown => "UNKNOWN",
        /// Exact match.
        Exact => "EXACT",
        /// Phrase match.
        Phrase => "PHRASE",
        /// Broad match.
        Broad => "BROAD",
    }
}

wire_enum! {
    /// The kind of targeting rule an ad group criterion is.
    pub enum CriterionType {
        /// Not specified.
        #[default]
        Unspecified => "UNSPECIFIED",
        /// Value unknown in the requested API version.
        Unknown => "UNKNOWN",
        /// Keyword, e.g. 'mars cruise'.
        Keyword => "KEYWORD",
        /// Placement, aka website.
        Placement => "PLACEMENT",
        /// Mobile application categories to target.
        MobileAppCategory => "MOBILE_APP_CATEGORY",
        /// Mobile applications to target.
        MobileApplication => "MOBILE_APPLICATION",
        /// Devices to target.
        Device => "DEVICE",
        /// Locations to target.
        Location => "LOCATION",
        /// Listing groups to target.
        ListingGroup => "LISTING_GROUP",
        /// Age range.
        AgeRange => "AGE_RANGE",
        /// Gender.
        Gender => "GENDER",
        /// Income range.
        IncomeRange => "INCOME_RANGE",
        /// Parental status.
        ParentalStatus => "PARENTAL_STATUS",
        /// YouTube video.
        YoutubeVideo => "YOUTUBE_VIDEO",
        /// YouTube channel.
        YoutubeChannel => "YOUTUBE_CHANNEL",
        /// User list.
        UserList => "USER_LIST",
        /// Proximity.
        Proximity => "PROXIMITY",
        /// Topic.
        Topic => "TOPIC",
        /// Language.
        Language => "LANGUAGE",
        /// Webpage.
        Webpage => "WEBPAGE",
    }
}
