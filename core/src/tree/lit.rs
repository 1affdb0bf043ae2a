use ecow::EcoString;

/// Terminal payload of an [`Expr::Literal`](super::Expr::Literal) node.
///
/// Text payloads are kept raw, exactly as the caller supplied them. Escapes
/// are never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lit {
    /// String literal
    Str(EcoString),

    /// Integer literal
    Int(i64),

    /// Identifier reference
    Ident(EcoString),
}

impl Lit {
    pub fn str(text: impl Into<EcoString>) -> Self {
        Lit::Str(text.into())
    }

    pub fn ident(name: impl Into<EcoString>) -> Self {
        Lit::Ident(name.into())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Lit::Int(value) => Some(*value),
            Lit::Str(_) | Lit::Ident(_) => None,
        }
    }

    /// Raw text of a string literal or identifier.
    pub fn text(&self) -> Option<&str> {
        match self {
            Lit::Str(text) | Lit::Ident(text) => Some(text.as_str()),
            Lit::Int(_) => None,
        }
    }
}

impl From<i64> for Lit {
    fn from(value: i64) -> Self {
        Lit::Int(value)
    }
}
