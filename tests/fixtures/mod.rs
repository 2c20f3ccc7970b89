//! Test fixtures shared by the API tests

/// A scene lookup and the values it should produce.
#[derive(Debug, Clone)]
pub struct SceneFixture {
    pub slug: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
}

pub const SCENE_FIXTURES: &[SceneFixture] = &[
    SceneFixture {
        slug: "chair-42",
        image_url: "https://x/img.png",
        description: "Plain https image",
    },
    SceneFixture {
        slug: "lamp",
        image_url: "http://cdn.example.com/hero.jpg?w=1200&q=80",
        description: "http image with query string",
    },
    SceneFixture {
        slug: "posts/why-rust",
        image_url: "https://images.example.com/a b/hero.webp",
        description: "Slug with slash, URL with a space",
    },
];

/// Eight-byte PNG signature followed by an IHDR chunk header.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

pub const NOT_IMPLEMENTED: &str = "Modal worker not yet implemented";
