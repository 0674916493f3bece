//! Rendering of owner and group identifiers in listings.

/// Turns numeric identifiers into the text printed in a listing.
pub trait OwnerResolver {
    /// Text for user `uid`.
    fn user_name(&self, uid: u32) -> String;

    /// Text for group `gid`.
    fn group_name(&self, gid: u32) -> String;
}

impl<T: OwnerResolver + ?Sized> OwnerResolver for &T {
    fn user_name(&self, uid: u32) -> String {
        (**self).user_name(uid)
    }

    fn group_name(&self, gid: u32) -> String {
        (**self).group_name(gid)
    }
}

/// Prints identifiers as decimal numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumericOwners;

impl OwnerResolver for NumericOwners {
    fn user_name(&self, uid: u32) -> String {
        uid.to_string()
    }

    fn group_name(&self, gid: u32) -> String {
        gid.to_string()
    }
}

/// Looks identifiers up in the system account database, falling back to the
/// number when no name is known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemOwners;

#[cfg(unix)]
impl OwnerResolver for SystemOwners {
    fn user_name(&self, uid: u32) -> String {
        uzers::get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| uid.to_string())
    }

    fn group_name(&self, gid: u32) -> String {
        uzers::get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| gid.to_string())
    }
}

#[cfg(not(unix))]
impl OwnerResolver for SystemOwners {
    fn user_name(&self, uid: u32) -> String {
        NumericOwners.user_name(uid)
    }

    fn group_name(&self, gid: u32) -> String {
        NumericOwners.group_name(gid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_owners_print_ids() {
        assert_eq!(NumericOwners.user_name(1000), "1000");
        assert_eq!(NumericOwners.group_name(0), "0");
    }

    #[test]
    fn system_owners_fall_back_to_numbers() {
        // An id this large is not allocated on any sane system.
        assert_eq!(SystemOwners.user_name(4_000_000_123), "4000000123");
        assert_eq!(SystemOwners.group_name(4_000_000_123), "4000000123");
    }

    #[test]
    fn resolver_by_reference() {
        fn render<R: OwnerResolver>(resolver: R) -> String {
            resolver.user_name(7)
        }
        let owners = NumericOwners;
        assert_eq!(render(&owners), "7");
    }
}
