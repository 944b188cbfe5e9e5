use std::fmt;
use std::sync::OnceLock;
use regex::Regex;

#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Uri<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

// RFC 3986 appendix B; every string matches, so captures are always present.
fn rfc3986() -> &'static Regex {
    static RFC3986: OnceLock<Regex> = OnceLock::new();
    RFC3986.get_or_init(|| {
        Regex::new("^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\\?([^#]*))?(?:#(.*))?")
            .expect("rfc3986 pattern compiles")
    })
}

impl<'a> Uri<'a> {
    pub fn empty() -> Uri<'a> {
        Uri::default()
    }

    pub fn parse(value: &'a str) -> Uri<'a> {
        match rfc3986().captures(value) {
            Some(result) => Uri {
                scheme: result.get(1).map(|s| s.as_str()),
                authority: result.get(2).map(|s| s.as_str()),
                path: result.get(3).map(|s| s.as_str()).unwrap_or(""),
                query: result.get(4).map(|s| s.as_str()),
                fragment: result.get(5).map(|s| s.as_str()),
            },
            None => Uri { path: value, ..Uri::default() }
        }
    }

    /// Value of the first `name=value` pair in the query string.
    pub fn query_param(&self, name: &str) -> Option<&'a str> {
        self.query?.split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl<'a> fmt::Display for Uri<'a> {
    fn fmt(&self, format: &mut fmt::Formatter) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(format, "{}:", scheme)?;
        }
        if let Some(authority) = self.authority {
            write!(format, "//{}", authority)?;
        }
        format.write_str(self.path)?;
        if let Some(query) = self.query {
            write!(format, "?{}", query)?;
        }
        if let Some(fragment) = self.fragment {
            write!(format, "#{}", fragment)?;
        }
        Ok(())
    }
}
