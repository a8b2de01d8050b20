//! Fixed lookup tables backing the property translator.
//!
//! Keyword tables are exact value → class maps; anything absent is dropped
//! by the caller. The bucket ladders snap a pixel value to the smallest
//! entry whose threshold is still >= the value.

use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

/// `display` values with a named utility counterpart.
pub static DISPLAY: phf::Map<&'static str, &'static str> = phf_map! {
    "flex" => "flex",
    "block" => "block",
    "inline" => "inline",
    "inline-block" => "inline-block",
    "grid" => "grid",
    "none" => "hidden",
};

pub static FLEX_DIRECTION: phf::Map<&'static str, &'static str> = phf_map! {
    "column" => "flex-col",
    "row" => "flex-row",
};

pub static JUSTIFY_CONTENT: phf::Map<&'static str, &'static str> = phf_map! {
    "center" => "justify-center",
    "space-between" => "justify-between",
    "flex-start" => "justify-start",
    "flex-end" => "justify-end",
};

pub static ALIGN_ITEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "center" => "items-center",
    "flex-start" => "items-start",
    "flex-end" => "items-end",
};

pub static TEXT_ALIGN: phf::Map<&'static str, &'static str> = phf_map! {
    "center" => "text-center",
    "left" => "text-left",
    "right" => "text-right",
};

/// Common pixel sizes → named text size classes.
pub static FONT_SIZE: phf::Map<u32, &'static str> = phf_map! {
    12u32 => "text-xs",
    14u32 => "text-sm",
    16u32 => "text-base",
    18u32 => "text-lg",
    20u32 => "text-xl",
    24u32 => "text-2xl",
    30u32 => "text-3xl",
    36u32 => "text-4xl",
    48u32 => "text-5xl",
    60u32 => "text-6xl",
};

/// Standard numeric weights → named weight classes.
pub static FONT_WEIGHT: phf::Map<u32, &'static str> = phf_map! {
    100u32 => "font-thin",
    200u32 => "font-extralight",
    300u32 => "font-light",
    400u32 => "font-normal",
    500u32 => "font-medium",
    600u32 => "font-semibold",
    700u32 => "font-bold",
    800u32 => "font-extrabold",
    900u32 => "font-black",
};

/// Ascending thresholds for padding/margin/gap scale suffixes.
const SPACING_LADDER: &[(u32, &str)] = &[(4, "1"), (8, "2"), (12, "3"), (16, "4"), (24, "6")];
const SPACING_OVERFLOW: &str = "8";

/// Ascending thresholds for border-radius classes.
const RADIUS_LADDER: &[(u32, &str)] = &[
    (2, "rounded-sm"),
    (4, "rounded"),
    (8, "rounded-md"),
    (12, "rounded-lg"),
];
const RADIUS_OVERFLOW: &str = "rounded-xl";

static PX_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)px").unwrap());

/// First `<number>px` token in a value, if any. Shorthands like
/// `12px 32px` yield the leading number.
pub fn first_px(value: &str) -> Option<u32> {
    PX_TOKEN_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Snap a spacing pixel value onto the bucket ladder, e.g. `("p", 16)` →
/// `p-4`, `("gap", 100)` → `gap-8`.
pub fn bucket_spacing(prefix: &str, px: u32) -> String {
    for (limit, suffix) in SPACING_LADDER {
        if px <= *limit {
            return format!("{}-{}", prefix, suffix);
        }
    }
    format!("{}-{}", prefix, SPACING_OVERFLOW)
}

/// Snap a border-radius pixel value onto the radius ladder.
pub fn bucket_radius(px: u32) -> String {
    for (limit, class) in RADIUS_LADDER {
        if px <= *limit {
            return (*class).to_string();
        }
    }
    RADIUS_OVERFLOW.to_string()
}

/// Generic 4px-grid converter: exact multiples land on the numbered scale,
/// everything else keeps the literal value as an arbitrary-value class.
pub fn px_to_scale_class(prefix: &str, px: u32) -> String {
    if px % 4 == 0 {
        format!("{}-{}", prefix, px / 4)
    } else {
        format!("{}-[{}px]", prefix, px)
    }
}
