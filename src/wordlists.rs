//! Curated word lists used by the recognizers and the extension engine.
//!
//! These are static, read-only vocabulary. The dynamic lists (common words,
//! clinical terms, user exclusions) live behind the [`crate::Lexicon`]
//! trait instead, so recognizers stay pure and testable with fakes; the
//! lists here only seed [`crate::SetLexicon::standard`].

/// Honorific titles that anchor the title-based name extractor.
pub const TITLES: &[&str] = &[
    "Dr", "Mr", "Mrs", "Ms", "Miss", "Mx", "Prof", "Professor", "Rev",
    "Sister", "Nurse", "Matron", "Sir", "Dame",
];

/// Relationship words that anchor the relationship-based name extractor.
pub const RELATIONSHIP_WORDS: &[&str] = &[
    // Kinship
    "mother", "father", "mum", "dad", "sister", "brother", "son", "daughter",
    "grandmother", "grandfather", "grandma", "grandpa", "aunt", "uncle",
    "cousin", "niece", "nephew", "stepmother", "stepfather", "stepsister",
    "stepbrother",
    // Te reo / cultural terms
    "whanau", "whangai", "koro", "kuia",
    // Partnerships
    "wife", "husband", "partner", "spouse", "fiance", "fiancee", "boyfriend",
    "girlfriend", "ex-wife", "ex-husband",
    // Social
    "friend", "flatmate", "roommate", "colleague", "coworker", "neighbour",
    "neighbor", "mate", "carer", "caregiver",
];

/// Lowercase particles that are valid inside a multi-word proper name.
///
/// A lowercase middle token of a 3+ word tagger candidate must be one of
/// these or the whole candidate is rejected.
pub const NAME_PARTICLES: &[&str] = &[
    "van", "der", "den", "ten", "te", "de", "del", "della", "da", "di", "du",
    "dos", "la", "le", "von", "bin", "ibn", "al", "st",
];

/// Ambiguous words that are simultaneously common English words and valid
/// first names. Pass 3 of the extension engine will prepend one of these to
/// a following person entity when it is capitalized mid-sentence.
pub const NAME_WORDS: &[&str] = &[
    // Months and seasons
    "April", "May", "June", "August", "Summer", "Autumn", "Winter",
    // Virtue names
    "Grace", "Hope", "Faith", "Joy", "Charity", "Patience", "Felicity",
    // Flower and nature names
    "Rose", "Lily", "Daisy", "Heather", "Iris", "Ivy", "Fern", "Hazel",
    "Olive", "Amber", "Pearl", "Ruby", "Dawn", "Eve", "Sky", "Brooke",
    // Other doubles
    "Melody", "Harmony", "Destiny", "Crystal",
];

/// Curated te reo Māori first names for the dictionary recognizer.
pub const MAORI_FIRST_NAMES: &[&str] = &[
    // Male
    "Wiremu", "Hemi", "Pita", "Rawiri", "Mikaere", "Tane", "Rangi", "Tamati",
    "Hohepa", "Aperahama", "Timoti", "Hone", "Paora", "Nikau", "Manaia",
    // Female
    "Aroha", "Kiri", "Mere", "Hana", "Anahera", "Moana", "Ngaire", "Whetu",
    "Kahu", "Ataahua", "Hinewai", "Hine", "Marama", "Ariana", "Maia",
];

/// Curated te reo Māori surnames for the dictionary recognizer.
pub const MAORI_SURNAMES: &[&str] = &[
    "Ngata", "Tawhiri", "Wairua", "Takiri", "Parata", "Ngati", "Whaanga",
    "Eruera", "Rangihau", "Paraone",
];

/// Capitalized English words the phonetic pattern would otherwise flag.
pub const PHONETIC_FALSE_POSITIVES: &[&str] = &[
    "Where", "When", "What", "Whether", "Whither", "Whence", "Whilst",
    "Thing", "Something", "Anything", "Nothing", "Young", "Along", "Among",
];

/// Ordinary English words that capitalize at sentence boundaries; seeds the
/// common-word gatekeeper of [`crate::SetLexicon::standard`].
pub const COMMON_WORDS: &[&str] = &[
    // Articles, conjunctions, prepositions
    "the", "a", "an", "and", "but", "or", "nor", "for", "yet", "so", "in",
    "on", "at", "to", "from", "with", "by", "of", "about", "as", "into",
    "over", "after", "before", "during",
    // Pronouns
    "he", "she", "it", "they", "we", "you", "i", "him", "her", "them", "us",
    "me", "his", "its", "their", "our", "your", "my", "hers", "theirs",
    // Common verbs
    "is", "was", "are", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "can", "could", "should", "said",
    "asked", "told", "saw", "went", "came", "called",
    // Determiners and question words
    "this", "that", "these", "those", "when", "where", "what", "which",
    "who", "why", "how", "all", "some", "any", "no", "not",
    // Clinical prose staples
    "patient", "client", "treatment", "therapy", "session", "care", "health",
    "medical", "clinical", "hospital", "clinic", "doctor", "nurse", "review",
    "referral", "discharge", "appointment", "medication", "history",
    // Relationship words double as common words
    "mother", "father", "sister", "brother", "son", "daughter", "wife",
    "husband", "partner", "friend", "family", "whanau",
];

/// Clinical abbreviations and jargon that resemble names; seeds the
/// clinical-term gatekeeper of [`crate::SetLexicon::standard`].
pub const CLINICAL_TERMS: &[&str] = &[
    "gp", "ed", "dhb", "nhi", "acc", "mdt", "adhd", "ptsd", "ocd", "cbt",
    "dbt", "gad", "bpd", "asd", "bp", "hr", "bmi", "mri", "ct", "ecg",
    "eeg", "ot", "pt", "rn", "sw", "prn", "nad", "sob", "hx", "rx", "tx",
    "dx", "mse", "etoh",
];
