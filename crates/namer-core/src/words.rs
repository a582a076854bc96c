//! Embedded English word lists used by [`crate::generator::RandomWordPairs`].
//!
//! Lower-case, common, family-friendly words only. The two-syllable entries
//! only show up once `max_syllables` is raised above the default of 2.

pub const ADJECTIVES: &[&str] = &[
    "able", "bold", "brave", "brief", "bright", "brisk", "broad", "calm", "chief", "clean",
    "clear", "close", "cool", "crisp", "dark", "deep", "dear", "dry", "fair", "fast", "fine",
    "firm", "first", "flat", "fresh", "full", "glad", "gold", "good", "grand", "great", "green",
    "high", "huge", "just", "keen", "kind", "large", "last", "late", "light", "live", "long",
    "loud", "low", "main", "mild", "near", "neat", "new", "next", "nice", "old", "pale", "plain",
    "prime", "proud", "pure", "quick", "quiet", "rare", "real", "rich", "right", "ripe", "round",
    "safe", "sharp", "short", "slow", "small", "smart", "soft", "solid", "sound", "spare",
    "steep", "still", "strong", "sure", "sweet", "swift", "tall", "tame", "thick", "tight",
    "true", "vast", "warm", "whole", "wide", "wild", "wise", "young", "happy", "silver",
    "simple", "golden", "honest", "lucky",
];

pub const NOUNS: &[&str] = &[
    "air", "arch", "arm", "art", "bank", "bar", "base", "bay", "beach", "bean", "bear", "bell",
    "bird", "blade", "block", "boat", "bolt", "bond", "book", "box", "branch", "bread", "bridge",
    "brook", "cake", "camp", "cap", "card", "case", "cat", "cave", "chain", "chalk", "chart",
    "claim", "class", "cliff", "clock", "cloud", "coast", "coat", "code", "coin", "cord", "corn",
    "court", "crane", "crest", "crow", "crown", "cube", "cup", "dawn", "deck", "deer", "desk",
    "dock", "door", "dove", "dream", "drum", "dust", "edge", "elm", "eye", "face", "farm",
    "fern", "field", "fire", "fish", "flag", "flame", "fleet", "flock", "floor", "fog", "fox",
    "frame", "frost", "fruit", "game", "gate", "gem", "glade", "glass", "globe", "goat", "grain",
    "grape", "grove", "guide", "gull", "hall", "hand", "harp", "hat", "hawk", "heart", "hill",
    "hive", "home", "hook", "horn", "horse", "house", "inn", "jar", "jet", "key", "kite", "lake",
    "lamp", "land", "lark", "leaf", "light", "lime", "line", "link", "lion", "lock", "loft",
    "map", "mark", "mast", "mill", "mint", "moon", "moss", "moth", "nest", "net", "note",
    "oak", "owl", "pad", "page", "palm", "park", "path", "peak", "pear", "pen", "pine", "pint",
    "plan", "plant", "plum", "pod", "point", "pond", "port", "post", "quill", "rail", "rain",
    "ray", "reed", "ridge", "ring", "road", "rock", "roof", "room", "root", "rope", "rose",
    "sail", "salt", "sand", "seed", "shade", "shell", "ship", "shore", "sky", "slate", "snow",
    "song", "spark", "spring", "star", "stem", "step", "stone", "storm", "stream", "sun",
    "swan", "table", "tide", "tower", "track", "trail", "tree", "vale", "vine", "wave", "way",
    "well", "wind", "wing", "wolf", "wood", "yard", "river", "garden", "harbor", "meadow",
    "window", "rocket", "pixel", "signal",
];
