// grammar/patterns.rs
use fancy_regex::Regex;
use once_cell::sync::Lazy;

/// One named entry of the grammar catalogue. The regexes are deliberately
/// approximate: false positives and negatives on unusual phrasing are
/// expected and relied upon by callers, so the patterns are not refined
/// beyond this list.
pub struct GrammarPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub pattern: Regex,
}

fn entry(
    name: &'static str,
    description: &'static str,
    examples: &'static [&'static str],
    pattern: &str,
) -> GrammarPattern {
    GrammarPattern {
        name,
        description,
        examples,
        pattern: Regex::new(pattern).unwrap(),
    }
}

/// Ordered, immutable catalogue compiled once per process.
pub static GRAMMAR_PATTERNS: Lazy<Vec<GrammarPattern>> = Lazy::new(|| {
    vec![
        entry(
            "present_simple",
            "Habitual or general statements in the present tense",
            &["She works in a bank.", "They live in Beijing."],
            r"(?i)\b(?:he|she|it)\s+[a-z]+s\b|\b(?:i|you|we|they)\s+(?!will\b|would\b|shall\b|am\b|are\b|was\b|were\b|have\b|has\b|had\b|do\b|does\b|did\b|can\b|could\b|may\b|might\b|must\b|should\b)[a-z]+\b",
        ),
        entry(
            "present_continuous",
            "Actions in progress at the moment of speaking",
            &["I am reading a book.", "She is working late."],
            r"(?i)\b(?:am|is|are)\s+(?:not\s+)?[a-z]+ing\b",
        ),
        entry(
            "past_simple",
            "Completed actions in the past",
            &["He walked to school.", "We saw the film."],
            r"(?i)\b[a-z]+ed\b|\b(?:was|were|went|came|saw|said|told|did|made|took|got|had)\b",
        ),
        entry(
            "past_continuous",
            "Actions in progress at a past moment",
            &["They were sleeping when I called.", "She was cooking dinner."],
            r"(?i)\b(?:was|were)\s+(?:not\s+)?[a-z]+ing\b",
        ),
        entry(
            "present_perfect",
            "Past actions with present relevance",
            &["I have finished my homework.", "She has seen that film."],
            r"(?i)\b(?:have|has)\s+(?:not\s+)?(?:[a-z]+ed|been|done|gone|had|made|seen|taken|written|known|given|found)\b",
        ),
        entry(
            "present_perfect_continuous",
            "Actions continuing up to the present",
            &["I have been working all day.", "It has been raining since noon."],
            r"(?i)\b(?:have|has)\s+(?:not\s+)?been\s+[a-z]+ing\b",
        ),
        entry(
            "future_simple",
            "Predictions and spontaneous decisions about the future",
            &["I will call you tomorrow.", "She will not agree."],
            r"(?i)\b(?:will|shall)\s+(?:not\s+)?[a-z]+\b|\bwon't\s+[a-z]+\b",
        ),
        entry(
            "be_going_to",
            "Planned or intended future actions",
            &["We are going to travel next month.", "It is going to rain."],
            r"(?i)\b(?:am|is|are)\s+(?:not\s+)?going\s+to\s+[a-z]+\b",
        ),
        entry(
            "modal_verbs",
            "Ability, permission, obligation and speculation",
            &["You should rest.", "He can swim very well."],
            r"(?i)\b(?:can|could|may|might|must|should|would|ought)\s+(?:not\s+)?[a-z]+\b",
        ),
        entry(
            "passive_voice",
            "Subject receives the action",
            &["The letter was written by Tom.", "The road is being repaired."],
            r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+(?:not\s+)?[a-z]+(?:ed|en)\b",
        ),
        entry(
            "conditionals",
            "If-clauses paired with a modal result clause",
            &["If it rains, we will stay home.", "I would help if I could."],
            r"(?i)\bif\b[^.!?]*\b(?:will|would|can|could|may|might|should)\b|\b(?:will|would|can|could|may|might|should)\b[^.!?]*\bif\b",
        ),
        entry(
            "relative_clauses",
            "Clauses modifying a noun via a relative pronoun",
            &["The man who called is my uncle.", "The book that I read was long."],
            r"(?i)\b[a-z]+\s+(?:who|whom|whose|which|that)\s+[a-z]+\b",
        ),
        entry(
            "reported_speech",
            "Reporting what someone said or asked",
            &["She said that she was tired.", "He told me that he would come."],
            r"(?i)\b(?:said|says|told|asked|explained|mentioned|reported)\s+(?:[a-z]+\s+)?that\b",
        ),
        entry(
            "gerunds",
            "Verb -ing forms used as nouns",
            &["Swimming is good exercise.", "I enjoy reading."],
            r"(?i)\b(?:enjoy|enjoys|enjoyed|avoid|avoids|avoided|finish|finishes|finished|keep|keeps|kept|mind|minds|suggest|suggests|suggested|consider|considers|considered|practice|practices|practiced|stop|stops|stopped|like|likes|love|loves|hate|hates)\s+[a-z]+ing\b|^[a-z]+ing\b",
        ),
        entry(
            "infinitives",
            "To-infinitive complements after common verbs",
            &["I want to learn English.", "They decided to leave early."],
            r"(?i)\b(?:want|wants|wanted|need|needs|needed|decide|decides|decided|hope|hopes|hoped|plan|plans|planned|try|tries|tried|learn|learns|learned|agree|agrees|agreed|promise|promises|promised|refuse|refuses|refused)\s+to\s+[a-z]+\b",
        ),
    ]
});
