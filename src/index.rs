//! Sentinel-valued index trait for link fields.
//!
//! Link fields hold a reserved sentinel value (the type's `MAX`) instead of
//! `Option<Idx>`, keeping nodes compact. The sentinel doubles as the ring
//! anchor: a node whose `next` is `NONE` sits immediately before the anchor,
//! so the ring stays conceptually circular without a payload-less node ever
//! living in storage.

/// A copyable index with a reserved sentinel "none" value.
///
/// # Example
///
/// ```
/// use ringlist::Index;
///
/// let idx: u32 = 7;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no index" / the ring anchor.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts to `usize` for slot addressing.
    fn as_usize(self) -> usize;

    /// Converts from a slot position.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, usize);
