use std::fmt;

/// Binding languages supported by `protoc`'s built-in generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    Cpp,
    CSharp,
    Java,
    Kotlin,
    ObjC,
    Php,
    Ruby,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::ObjC => "objc",
            Self::Php => "php",
            Self::Ruby => "ruby",
        }
    }

    /// Compiler flag selecting this generator, e.g. `--python_out`.
    pub fn out_flag(&self) -> String {
        format!("--{}_out", self.as_str())
    }

    /// Marker file that makes a directory importable, for languages that need one.
    pub fn package_marker(&self) -> Option<&'static str> {
        match self {
            Self::Python => Some(crate::DEFAULT_PACKAGE_MARKER),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
