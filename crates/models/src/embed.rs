use smol_str::SmolStr;
use timestamp::Timestamp;

/// The platform's fixed set of embed types, lowercase strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedType {
    #[default]
    Rich,
    Image,
    Video,
    Gifv,
    Article,
    Link,
}

impl EmbedType {
    pub fn from_name(name: &str) -> Option<EmbedType> {
        Some(match name {
            "rich" => EmbedType::Rich,
            "image" => EmbedType::Image,
            "video" => EmbedType::Video,
            "gifv" => EmbedType::Gifv,
            "article" => EmbedType::Article,
            "link" => EmbedType::Link,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            EmbedType::Rich => "rich",
            EmbedType::Image => "image",
            EmbedType::Video => "video",
            EmbedType::Gifv => "gifv",
            EmbedType::Article => "article",
            EmbedType::Link => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, rename = "type")]
    pub ty: EmbedType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,

    /// 0xRRGGBB accent color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: SmolStr,
    pub value: SmolStr,

    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: SmolStr,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,
}
