#[derive(Debug, Clone, Default)]
pub struct Environment {
    pairs: Vec<(String, String)>
}

impl Environment {
    /// Usually `Environment::from(std::env::vars())`.
    pub fn from<I>(vars: I) -> Environment where I: IntoIterator<Item=(String, String)> {
        Environment {
            pairs: vars.into_iter().collect()
        }
    }

    /// Adds pairs in front of the existing ones, so they win on lookup.
    pub fn with(self, pairs: Vec<(&str, &str)>) -> Environment {
        let mut vec: Vec<(String, String)> = pairs.into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        vec.extend(self.pairs);
        Environment {
            pairs: vec
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.pairs.iter()
            .find(|it| it.0 == name)
            .map(|it| it.1.clone())
    }

    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    pub fn empty() -> Environment {
        Environment {
            pairs: vec!()
        }
    }
}
