//! Description of the generic types `Bits` and `Prefix`.

use ipnet::{Ipv4Net, Ipv6Net};
#[cfg(feature = "ipnetwork")]
use ipnetwork::{Ipv4Network, Ipv6Network};
use num_traits::{CheckedShr, PrimInt, Unsigned};

use crate::{Error, Result};

/// Fixed-width key read most significant bit first. Implemented for every unsigned primitive
/// integer; IPv4 uses `u32` and IPv6 uses `u128`.
pub trait Bits: Unsigned + PrimInt + CheckedShr {
    /// Number of bits in the key.
    fn width() -> u8 {
        Self::zero().count_zeros() as u8
    }

    /// Check if a specific bit is set (counted from the left, where 0 is the first bit from the
    /// left). Bits beyond the width are never set.
    fn is_bit_set(&self, bit: u8) -> bool {
        let msb = Self::one().rotate_right(1);
        msb.checked_shr(u32::from(bit))
            .map_or(false, |mask| *self & mask != Self::zero())
    }
}

impl<R> Bits for R where R: Unsigned + PrimInt + CheckedShr {}

/// Trait for defining prefixes of a single address family.
pub trait Prefix {
    /// How can the prefix be represented. This must be one of `u8`, `u16`, `u32`, `u64`, or `u128`.
    type R: Bits;

    /// Get raw representation of the address, ignoring the prefix length. Bits after the prefix
    /// length are never inspected.
    fn repr(&self) -> Self::R;

    /// Prefix length
    fn prefix_len(&self) -> u8;
}

/// The prefix length, or [`Error::BadIp`] if it does not fit into the key.
pub(crate) fn checked_len<P: Prefix>(prefix: &P) -> Result<u8> {
    let len = prefix.prefix_len();
    if len > P::R::width() {
        Err(Error::BadIp)
    } else {
        Ok(len)
    }
}

impl Prefix for Ipv4Net {
    type R = u32;

    fn repr(&self) -> u32 {
        self.addr().into()
    }

    fn prefix_len(&self) -> u8 {
        self.prefix_len()
    }
}

impl Prefix for Ipv6Net {
    type R = u128;

    fn repr(&self) -> u128 {
        self.addr().into()
    }

    fn prefix_len(&self) -> u8 {
        self.prefix_len()
    }
}

#[cfg(feature = "ipnetwork")]
impl Prefix for Ipv4Network {
    type R = u32;

    fn repr(&self) -> u32 {
        self.ip().into()
    }

    fn prefix_len(&self) -> u8 {
        self.prefix()
    }
}

#[cfg(feature = "ipnetwork")]
impl Prefix for Ipv6Network {
    type R = u128;

    fn repr(&self) -> u128 {
        self.ip().into()
    }

    fn prefix_len(&self) -> u8 {
        self.prefix()
    }
}

#[cfg(feature = "cidr")]
impl Prefix for cidr::Ipv4Cidr {
    type R = u32;

    fn repr(&self) -> u32 {
        self.first_address().into()
    }

    fn prefix_len(&self) -> u8 {
        self.network_length()
    }
}

#[cfg(feature = "cidr")]
impl Prefix for cidr::Ipv6Cidr {
    type R = u128;

    fn repr(&self) -> u128 {
        self.first_address().into()
    }

    fn prefix_len(&self) -> u8 {
        self.network_length()
    }
}

impl<R> Prefix for (R, u8)
where
    R: Bits,
{
    type R = R;

    fn repr(&self) -> R {
        self.0
    }

    fn prefix_len(&self) -> u8 {
        self.1
    }
}
