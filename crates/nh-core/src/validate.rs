//! Field format predicates.
//!
//! Every predicate is total: any `&str` yields `true` or `false`, nothing
//! panics and nothing is trimmed on the caller's behalf.

use ipnet::Ipv4Net;
use std::str::FromStr;

/// `lat,lon` with an optional leading `-` and fractional part on each side,
/// latitude within [-90, 90] and longitude within [-180, 180].
#[must_use]
pub fn valid_location_format(loc: &str) -> bool {
    match parse_lat_lon(loc) {
        Some((lat, lon)) => (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon),
        None => false,
    }
}

/// Exactly two uppercase ASCII letters.
#[must_use]
pub fn valid_country_code_format(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// One or more of `[A-Za-z0-9._-]`.
#[must_use]
pub fn valid_group_format(group: &str) -> bool {
    !group.is_empty()
        && group
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
}

/// One or more of `[A-Za-z0-9_-]`.
#[must_use]
pub fn valid_network_name_format(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
}

/// Dotted-quad `/prefix` syntax that also parses as a strict IPv4 network
/// (octets <= 255, prefix <= 32, no host bits set).
#[must_use]
pub fn valid_cidr_format(cidr: &str) -> bool {
    if !cidr_shape(cidr) {
        return false;
    }
    Ipv4Net::from_str(cidr).is_ok_and(|net| net.trunc() == net)
}

/// Split a `lat,lon` string into its two numbers without range checks.
///
/// Whitespace is accepted after the comma only.
pub(crate) fn parse_lat_lon(s: &str) -> Option<(f64, f64)> {
    let (lat, lon) = s.split_once(',')?;
    let lon = lon.trim_start();
    if !is_decimal(lat) || !is_decimal(lon) {
        return None;
    }
    Some((lat.parse().ok()?, lon.parse().ok()?))
}

/// `-?[0-9]+(\.[0-9]+)?`
fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.map_or(true, all_digits)
}

/// `d{1,3}.d{1,3}.d{1,3}.d{1,3}/d{1,2}`, octets without leading zeros
fn cidr_shape(s: &str) -> bool {
    let Some((addr, prefix)) = s.split_once('/') else {
        return false;
    };
    let digits = |p: &str, max: usize| {
        (1..=max).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit())
    };
    // `010` is not an octet
    let octet = |o: &str| digits(o, 3) && (o.len() == 1 || !o.starts_with('0'));
    let octets: Vec<&str> = addr.split('.').collect();
    octets.len() == 4 && octets.iter().copied().all(octet) && digits(prefix, 2)
}
