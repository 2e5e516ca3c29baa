use std::fmt;

/// Number of pointer levels between a declared type and its base type.
///
/// The registry never declares more than two levels, so deeper indirection has no representation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Indirection {
    #[default]
    None,
    Single,
    Double,
}

impl Indirection {
    pub fn depth(self) -> usize {
        match self {
            Self::None => 0,
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// A parameter or member type: base type name plus inferred indirection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    pub base_name: String,
    pub indirection: Indirection,
}

impl TypeSpec {
    pub fn new(base_name: impl Into<String>, indirection: Indirection) -> Self {
        Self {
            base_name: base_name.into(),
            indirection,
        }
    }

    /// Infer the indirection of `base_name` from the raw declaration text surrounding it, e.g.
    /// `const VkAllocationCallbacks* pAllocator`.
    ///
    /// This is a substring test over the fixed declaration shapes of the registry, not a C
    /// declarator parser. Double indirection (`T**` or `T* const*`) is checked before single
    /// indirection, and text without any marker is a plain value.
    pub fn infer(declaration: &str, base_name: &str) -> Self {
        let indirection = if declaration.contains(&format!("{base_name}**"))
            || declaration.contains(&format!("{base_name}* const*"))
        {
            Indirection::Double
        } else if declaration.contains(&format!("{base_name}*")) {
            Indirection::Single
        } else {
            Indirection::None
        };
        Self::new(base_name, indirection)
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_name)?;
        for _ in 0..self.indirection.depth() {
            write!(f, "*")?;
        }
        Ok(())
    }
}
