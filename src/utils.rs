// src/utils.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Everything except A-Z a-z 0-9 - _ . ! ~ * ' ( ), same as encodeURIComponent.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the URL that asks a relay to fetch `target` on our behalf.
/// The target is appended fully percent-encoded, whatever the prefix ends with.
pub fn relayed_url(prefix: &str, target: &str) -> String {
    format!("{}{}", prefix, utf8_percent_encode(target, COMPONENT))
}

/// Shortens long URLs for log lines.
pub fn short_url(url: &str) -> &str {
    const MAX: usize = 80;
    if url.len() <= MAX {
        return url;
    }
    let mut end = MAX;
    while !url.is_char_boundary(end) {
        end -= 1;
    }
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relayed_url_encodes_target() {
        assert_eq!(
            relayed_url(
                "https://api.codetabs.com/v1/proxy?quest=",
                "https://servers-frontend.fivem.net/api/servers/?limit=500"
            ),
            "https://api.codetabs.com/v1/proxy?quest=https%3A%2F%2Fservers-frontend.fivem.net%2Fapi%2Fservers%2F%3Flimit%3D500"
        );
        assert_eq!(
            relayed_url("https://thingproxy.freeboard.io/fetch/", "https://cfx.re/api/servers/list.json"),
            "https://thingproxy.freeboard.io/fetch/https%3A%2F%2Fcfx.re%2Fapi%2Fservers%2Flist.json"
        );
    }

    #[test]
    fn test_relayed_url_component_encoding() {
        assert_eq!(
            relayed_url("p?q=", "https://h/a b~!'()*"),
            "p?q=https%3A%2F%2Fh%2Fa%20b~!'()*"
        );
        assert_eq!(
            relayed_url("https://relay.test/fetch/", "https://h/seznam?kraj=Žalec&n=1+2"),
            "https://relay.test/fetch/https%3A%2F%2Fh%2Fseznam%3Fkraj%3D%C5%BDalec%26n%3D1%2B2"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(short_url("http://a"), "http://a");
        let long = format!("http://{}", "č".repeat(60));
        let short = short_url(&long);
        assert!(short.len() <= 80);
        assert!(long.starts_with(short));
    }
}
