use std::{fmt, num::ParseIntError, str::FromStr};

// All identities are assigned by the storage layer and therefore plain
// numbers. Each entity gets its own newtype so that a venue id can never be
// passed where an artist id is expected.
macro_rules! numeric_id {
    ($name:ident) => {
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(from: i64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for i64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(VenueId);
numeric_id!(ArtistId);
numeric_id!(ShowId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_str() {
        assert_eq!(VenueId::new(42), "42".parse().unwrap());
        assert!("".parse::<VenueId>().is_err());
        assert!("fortytwo".parse::<ArtistId>().is_err());
    }

    #[test]
    fn id_display_round_trip() {
        let id = ShowId::new(7);
        assert_eq!(id, id.to_string().parse().unwrap());
    }
}
