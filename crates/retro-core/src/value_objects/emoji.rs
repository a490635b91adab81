//! The fixed set of reactji identifiers a viewer may apply

/// Default cap on distinct reactji groups per reactable
pub const DEFAULT_MAX_REACTJIS: usize = 12;

/// Allowed reactji identifiers (emoji short names)
pub const EMOJI_IDS: &[&str] = &[
    "+1",
    "-1",
    "100",
    "angry",
    "astonished",
    "blush",
    "bulb",
    "clap",
    "confused",
    "cry",
    "eyes",
    "face_with_rolling_eyes",
    "fire",
    "grimacing",
    "grin",
    "grinning",
    "heart",
    "heart_eyes",
    "hugging_face",
    "innocent",
    "joy",
    "laughing",
    "mask",
    "money_mouth_face",
    "muscle",
    "neutral_face",
    "ok_hand",
    "open_mouth",
    "partying_face",
    "pensive",
    "pray",
    "raised_hands",
    "relieved",
    "rocket",
    "rolling_on_the_floor_laughing",
    "scream",
    "see_no_evil",
    "slightly_smiling_face",
    "smile",
    "smiley",
    "smirk",
    "sob",
    "star",
    "star-struck",
    "sunglasses",
    "sweat_smile",
    "tada",
    "thinking_face",
    "thumbsdown",
    "thumbsup",
    "trophy",
    "upside_down_face",
    "wave",
    "white_check_mark",
    "wink",
    "x",
    "yum",
    "zany_face",
];

/// Check whether a reactji id belongs to the allowed set
pub fn is_valid_reactji(id: &str) -> bool {
    EMOJI_IDS.contains(&id)
}
