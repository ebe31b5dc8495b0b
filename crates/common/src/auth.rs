/// Source of the session token attached to mutating calls.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    // An empty token is the same as no session.
    fn token(&self) -> Option<String> {
        self.0.clone().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_absent() {
        assert_eq!(StaticToken::new(Some(String::from("  "))).token(), None);
        assert_eq!(StaticToken::none().token(), None);
        assert_eq!(
            StaticToken::new(Some(String::from("abc"))).token(),
            Some(String::from("abc"))
        );
    }
}
