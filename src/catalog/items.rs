//! Fixed Korean text items, grouped by learning category.
//!
//! Category contents and their concatenation order determine the registry
//! order, so entries here must not be reordered.

/// Basic vowels (단모음/기본 모음).
pub const BASIC_VOWELS: &[&str] = &[
    "ㅏ", "ㅑ", "ㅓ", "ㅕ", "ㅗ", "ㅛ", "ㅜ", "ㅠ", "ㅡ", "ㅣ",
];

/// Complex vowels (이중 모음).
pub const COMPLEX_VOWELS: &[&str] = &[
    "ㅐ", "ㅒ", "ㅔ", "ㅖ", "ㅘ", "ㅙ", "ㅚ", "ㅝ", "ㅞ", "ㅟ", "ㅢ",
];

/// Basic consonants (자음).
pub const BASIC_CONSONANTS: &[&str] = &[
    "ㄱ", "ㄴ", "ㄷ", "ㄹ", "ㅁ", "ㅂ", "ㅅ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ",
    "ㅍ", "ㅎ",
];

/// Double consonants (쌍자음).
pub const DOUBLE_CONSONANTS: &[&str] = &["ㄲ", "ㄸ", "ㅃ", "ㅆ", "ㅉ"];

/// Syllable examples: each consonant row combined with ㅏ, ㅗ, ㅜ, ㅡ, ㅣ.
pub const SYLLABLE_EXAMPLES: &[&str] = &[
    "가", "나", "다", "라", "마", "바", "사", "아", "자", "차", "카", "타",
    "파", "하", "고", "노", "도", "로", "모", "보", "소", "오", "조", "초",
    "코", "토", "포", "호", "구", "누", "두", "루", "무", "부", "수", "우",
    "주", "추", "쿠", "투", "푸", "후", "그", "느", "드", "르", "므", "브",
    "스", "으", "즈", "츠", "크", "트", "프", "흐", "기", "니", "디", "리",
    "미", "비", "시", "이", "지", "치", "키", "티", "피", "히",
];

/// Basic sentences and greetings.
pub const BASIC_PHRASES: &[&str] = &[
    "안녕하세요",   // Hello (formal)
    "안녕",         // Hi/Bye (casual)
    "감사합니다",   // Thank you (formal)
    "고마워",       // Thanks (casual)
    "제이름은",     // My name is
    "죄송합니다",   // I'm sorry (formal)
    "네",           // Yes
    "아니요",       // No
    "안녕히가세요", // Goodbye (to person leaving)
    "안녕히계세요", // Goodbye (when you leave)
];

/// Sino-Korean numbers 1 through 10.
pub const SINO_KOREAN_NUMBERS: &[&str] = &[
    "일", "이", "삼", "사", "오", "육", "칠", "팔", "구", "십",
];
