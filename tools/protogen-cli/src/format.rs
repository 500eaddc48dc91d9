use clap::ValueEnum;
use protogen::Language;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputLanguage {
    Python,
    Cpp,
    Csharp,
    Java,
    Kotlin,
    Objc,
    Php,
    Ruby,
}

impl OutputLanguage {
    pub fn language(&self) -> Language {
        match self {
            OutputLanguage::Python => Language::Python,
            OutputLanguage::Cpp => Language::Cpp,
            OutputLanguage::Csharp => Language::CSharp,
            OutputLanguage::Java => Language::Java,
            OutputLanguage::Kotlin => Language::Kotlin,
            OutputLanguage::Objc => Language::ObjC,
            OutputLanguage::Php => Language::Php,
            OutputLanguage::Ruby => Language::Ruby,
        }
    }
}
