use serde::{Deserialize, Serialize};
use strum::VariantArray;

/// The supported guidance styles, in the order the style switcher shows them.
/// Exactly one style is active per session; it only changes on an explicit
/// user selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
pub enum StylePreference {
    #[default]
    Comprehensive,
    Conversational,
    Business,
    Academic,
    Emotional,
}

impl StylePreference {
    pub const fn all() -> [Self; 5] {
        [
            Self::Comprehensive,
            Self::Conversational,
            Self::Business,
            Self::Academic,
            Self::Emotional,
        ]
    }

    /// Chinese label shown in the transcript and the style switcher.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comprehensive => "综合推荐",
            Self::Conversational => "口语交流",
            Self::Business => "商务书面",
            Self::Academic => "学术写作",
            Self::Emotional => "情感表达",
        }
    }

    /// ASCII name accepted wherever a style can be typed.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Conversational => "conversational",
            Self::Business => "business",
            Self::Academic => "academic",
            Self::Emotional => "emotional",
        }
    }

    /// Guidance text substituted into the system prompt template. Each style
    /// maps to exactly one instruction.
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Comprehensive => "提供3-4种不同风格的英文表达，包括口语、书面和情感表达版本",
            Self::Conversational => "重点提供自然、地道的口语表达，适合日常对话使用",
            Self::Business => "侧重正式、专业的商务和书面表达，注意用词准确",
            Self::Academic => "提供学术论文、正式文档中使用的严谨表达",
            Self::Emotional => "强调情感色彩和语气，提供不同情感强度的表达方式",
        }
    }

    /// Parse a user-typed style, accepting the Chinese label or the ASCII
    /// name.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|style| style.label() == input || style.name().eq_ignore_ascii_case(input))
    }
}

impl std::fmt::Display for StylePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
