//! Pre-written fortunes served when the provider is unavailable.

use ch_core::{FortuneResult, Language, RandomSource};

/// English fallback fortunes.
pub const EN_FORTUNES: &[&str] = &[
    "The shadows whisper of a new beginning. What you fear is actually a doorway.",
    "The stars align to suggest caution. Silence will be your strongest weapon today.",
    "A chaotic energy surrounds this card. Embrace the storm, for it clears the path.",
    "You are holding on too tight. Let go, and the answer will float to the surface.",
    "The universe sees your effort. A sudden reward is approaching from the East.",
    "Old patterns are breaking. The glitch in your reality is a feature, not a bug.",
];

/// Traditional Chinese fallback fortunes.
pub const ZH_FORTUNES: &[&str] = &[
    "陰影低語著新的開始。你所恐懼的，其實是一扇門。",
    "星辰排列提醒你謹慎。今天，沉默將是你最強大的武器。",
    "混沌的能量環繞著這張牌。擁抱風暴，因為它會為你清出道路。",
    "你握得太緊了。放手吧，答案自會浮上水面。",
    "宇宙看見了你的努力。一份意外的獎賞正從東方而來。",
    "舊有的模式正在瓦解。你現實中的裂縫是一份禮物，而非錯誤。",
];

/// The fallback list for a language.
pub fn fortunes(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_FORTUNES,
        Language::Zh => ZH_FORTUNES,
    }
}

/// Pick one fallback fortune uniformly at random and mark it simulated.
pub fn pick(language: Language, rng: &mut dyn RandomSource) -> FortuneResult {
    let list = fortunes(language);
    FortuneResult::simulated(list[rng.index(list.len())])
}
