use std::net::IpAddr;

/// True when `ip` is a literal IPv4 or IPv6 address. No name resolution.
pub fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}

/// True when `s` is non-empty and only ASCII decimal digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        for ip in ["10.0.0.5", "192.168.10.2", "0.0.0.0", "::1", "fe80::1", "2001:db8::8a2e:370:7334"] {
            assert!(is_valid_ip(ip), "{ip} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for ip in ["999.1.1.1", "999.999.999.999", "not-an-ip", "", "10.0.0", "localhost", " 10.0.0.5"] {
            assert!(!is_valid_ip(ip), "{ip} should be rejected");
        }
    }

    #[test]
    fn digit_check() {
        assert!(is_all_digits("8000"));
        assert!(!is_all_digits("abc"));
        assert!(!is_all_digits("80a"));
        assert!(!is_all_digits("-80"));
        assert!(!is_all_digits(""));
    }
}
