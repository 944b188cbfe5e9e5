#[derive(Debug, Clone, PartialEq, Default)]
pub struct Headers {
    pub vec: HeadersType,
}

pub type HeaderType = (String, String);
pub type HeadersType = Vec<HeaderType>;

impl Headers {
    pub fn empty() -> Headers {
        Headers { vec: vec!() }
    }

    pub fn from(pairs: Vec<(&str, &str)>) -> Headers {
        pairs.into_iter().fold(Headers::empty(), |acc, pair| acc.add(pair))
    }

    /// Adds a header; a repeated name is folded into one comma separated value.
    pub fn add(&self, header: (&str, &str)) -> Headers {
        let mut new: HeadersType = Vec::with_capacity(self.vec.len() + 1);
        let mut exists = false;
        for (name, value) in &self.vec {
            if name.eq_ignore_ascii_case(header.0) {
                new.push((name.clone(), format!("{}, {}", value, header.1)));
                exists = true
            } else {
                new.push((name.clone(), value.clone()))
            }
        }
        if !exists {
            new.push((header.0.to_string(), header.1.to_string()))
        }
        Headers { vec: new }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vec.iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}
