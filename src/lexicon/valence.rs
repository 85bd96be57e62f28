//! Embedded valence lexicon.
//!
//! A compact lexicon in the VADER tradition: each token carries a valence on
//! a nominal [-4, 4] scale. Coverage is tuned to hospitality/place reviews
//! (the engine's input domain) rather than general prose. Unknown tokens
//! contribute zero by construction.

/// Token → valence, sorted by token for binary search.
pub const VALENCE: &[(&str, f64)] = &[
    ("adorable", 2.2),
    ("adore", 2.9),
    ("amazing", 2.8),
    ("atrocious", -3.0),
    ("authentic", 1.6),
    ("average", -0.3),
    ("avoid", -1.6),
    ("awesome", 3.1),
    ("awful", -2.9),
    ("bad", -2.5),
    ("beautiful", 2.7),
    ("best", 3.2),
    ("bland", -1.5),
    ("boring", -1.9),
    ("breathtaking", 3.1),
    ("bright", 1.2),
    ("brilliant", 2.8),
    ("broken", -1.8),
    ("bustling", 0.8),
    ("buzzing", 0.9),
    ("calm", 1.3),
    ("charming", 2.3),
    ("cheap", -0.6),
    ("cheerful", 2.3),
    ("classic", 1.1),
    ("clean", 1.7),
    ("cold", -0.9),
    ("comfortable", 1.9),
    ("cozy", 2.0),
    ("cramped", -1.7),
    ("creepy", -2.1),
    ("crowded", -1.1),
    ("cute", 2.0),
    ("dark", -0.7),
    ("dead", -1.8),
    ("delicious", 2.7),
    ("delight", 2.6),
    ("delightful", 2.8),
    ("dingy", -1.9),
    ("dirty", -2.2),
    ("disappointing", -2.3),
    ("disgusting", -3.1),
    ("dreadful", -2.8),
    ("dull", -1.6),
    ("dynamic", 1.2),
    ("elegant", 2.1),
    ("empty", -0.8),
    ("energetic", 1.7),
    ("enjoy", 2.0),
    ("enjoyable", 2.2),
    ("enjoyed", 2.1),
    ("excellent", 3.0),
    ("exceptional", 2.9),
    ("exciting", 2.2),
    ("expensive", -1.0),
    ("fabulous", 2.8),
    ("fantastic", 2.9),
    ("favorite", 2.4),
    ("filthy", -2.8),
    ("fine", 0.8),
    ("franchise", -0.2),
    ("fresh", 1.7),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generic", -0.9),
    ("gentle", 1.5),
    ("genuine", 1.7),
    ("gloomy", -1.6),
    ("good", 1.9),
    ("gorgeous", 2.8),
    ("great", 3.1),
    ("grim", -1.9),
    ("grimy", -2.0),
    ("gross", -2.6),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.6),
    ("heaven", 2.7),
    ("hidden", 0.4),
    ("historic", 1.0),
    ("horrible", -2.9),
    ("hospitable", 2.0),
    ("incredible", 2.9),
    ("inviting", 1.9),
    ("lively", 1.6),
    ("loud", -1.0),
    ("love", 3.2),
    ("loved", 3.0),
    ("lovely", 2.8),
    ("luxurious", 2.2),
    ("magical", 2.7),
    ("mediocre", -1.4),
    ("mellow", 1.2),
    ("memorable", 1.9),
    ("messy", -1.6),
    ("moldy", -2.4),
    ("nasty", -2.7),
    ("nice", 1.8),
    ("noisy", -1.4),
    ("nothing", -0.8),
    ("obnoxious", -2.4),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("overpriced", -1.9),
    ("overrated", -1.8),
    ("peaceful", 1.9),
    ("perfect", 3.0),
    ("perfection", 2.9),
    ("pleasant", 2.1),
    ("polished", 1.5),
    ("poor", -2.1),
    ("pretentious", -1.7),
    ("pretty", 1.9),
    ("quaint", 1.4),
    ("quiet", 0.9),
    ("recommend", 1.8),
    ("recommended", 1.9),
    ("refined", 1.6),
    ("refreshing", 2.0),
    ("relaxed", 1.8),
    ("relaxing", 2.0),
    ("rowdy", -1.2),
    ("rude", -2.6),
    ("sad", -2.1),
    ("serene", 1.9),
    ("shabby", -1.8),
    ("slow", -1.2),
    ("sophisticated", 1.8),
    ("special", 1.8),
    ("spectacular", 2.9),
    ("stale", -1.8),
    ("sterile", -1.1),
    ("stunning", 2.9),
    ("stylish", 1.8),
    ("superb", 2.9),
    ("sweet", 2.0),
    ("terrible", -3.0),
    ("terrific", 2.8),
    ("tranquil", 1.8),
    ("trendy", 1.2),
    ("ugly", -2.3),
    ("uncomfortable", -1.9),
    ("unfriendly", -2.2),
    ("unique", 1.6),
    ("unpleasant", -2.1),
    ("unpretentious", 1.3),
    ("upscale", 1.3),
    ("vibrant", 1.8),
    ("warm", 1.7),
    ("welcoming", 2.1),
    ("wonderful", 2.8),
    ("worst", -3.1),
    ("wow", 2.6),
];

/// Tokens that flip the valence of a nearby scored token.
pub const NEGATIONS: &[&str] = &[
    "ain't",
    "aren't",
    "can't",
    "cannot",
    "couldn't",
    "didn't",
    "doesn't",
    "don't",
    "isn't",
    "neither",
    "never",
    "no",
    "nor",
    "not",
    "shouldn't",
    "wasn't",
    "won't",
    "wouldn't",
];

/// Tokens that amplify (positive delta) or dampen (negative delta) the
/// magnitude of the next scored token.
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("barely", -0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("hardly", -0.293),
    ("incredibly", 0.293),
    ("kinda", -0.293),
    ("least", -0.293),
    ("less", -0.293),
    ("really", 0.293),
    ("slightly", -0.293),
    ("so", 0.293),
    ("somewhat", -0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
];
