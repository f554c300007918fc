//! Scripted dialogue shown between milestone waves.

use skyshield_core::enums::Speaker;
use skyshield_core::state::Cutscene;

struct Briefing {
    wave: u32,
    speaker: Speaker,
    lines: &'static [&'static str],
}

const BRIEFINGS: [Briefing; 4] = [
    Briefing {
        wave: 3,
        speaker: Speaker::Briggs,
        lines: &[
            "Commander, COMANDANTE just broadcast on every channel:",
            "\"YOUR CITIES SPARKLE LIKE CANDLES. I WILL BLOW THEM OUT.\"",
            "What a drama queen. Keep those bases armed.",
        ],
    },
    Briefing {
        wave: 6,
        speaker: Speaker::Pixel,
        lines: &[
            "Bad news, Commander. COMANDANTE has hacked our decoy missile codes.",
            "Those fakes in the sky? That's our own tech turned against us.",
            "I'm working on a countermeasure. Buy me time.",
        ],
    },
    Briefing {
        wave: 9,
        speaker: Speaker::Briggs,
        lines: &[
            "The EMP strikes are frying our systems. COMANDANTE is adapting.",
            "It said, and I quote: \"I HAVE LEARNED YOUR PATTERNS, COMMANDER. YOU ARE PREDICTABLE.\"",
            "Rude. Prove it wrong.",
        ],
    },
    Briefing {
        wave: 12,
        speaker: Speaker::Pixel,
        lines: &[
            "I've located COMANDANTE's core. It's transmitting from an orbital satellite.",
            "If we survive long enough, I can upload a virus.",
            "Just... don't let the cities fall.",
        ],
    },
];

pub fn speaker_name(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::Briggs => "GEN. BRIGGS",
        Speaker::Pixel => "DR. PIXEL",
    }
}

/// Dialogue that follows the given wave, if it is a milestone.
pub fn briefing_after(wave: u32) -> Option<Cutscene> {
    BRIEFINGS.iter().find(|b| b.wave == wave).map(|b| Cutscene {
        wave: b.wave,
        speaker: b.speaker,
        name: speaker_name(b.speaker).to_string(),
        lines: b.lines.iter().map(|l| l.to_string()).collect(),
    })
}
