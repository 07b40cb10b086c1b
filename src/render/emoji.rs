//! Emoji shortcode catalog.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shortcode name (without colons) to canonical glyph.
static SHORTCODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("smile", "😄"),
        ("smiley", "😃"),
        ("grin", "😁"),
        ("grinning", "😀"),
        ("joy", "😂"),
        ("rofl", "🤣"),
        ("slightly_smiling_face", "🙂"),
        ("wink", "😉"),
        ("blush", "😊"),
        ("laughing", "😆"),
        ("sweat_smile", "😅"),
        ("innocent", "😇"),
        ("heart_eyes", "😍"),
        ("thinking_face", "🤔"),
        ("neutral_face", "😐"),
        ("expressionless", "😑"),
        ("smirk", "😏"),
        ("unamused", "😒"),
        ("disappointed", "😞"),
        ("cry", "😢"),
        ("sob", "😭"),
        ("angry", "😠"),
        ("rage", "😡"),
        ("scream", "😱"),
        ("fearful", "😨"),
        ("flushed", "😳"),
        ("sleeping", "😴"),
        ("dizzy_face", "😵"),
        ("melting_face", "🫠"),
        ("upside_down_face", "🙃"),
        ("face_with_rolling_eyes", "🙄"),
        ("zany_face", "🤪"),
        ("shushing_face", "🤫"),
        ("face_palm", "🤦"),
        ("shrug", "🤷"),
        ("wave", "👋"),
        ("clap", "👏"),
        ("raised_hands", "🙌"),
        ("pray", "🙏"),
        ("ok_hand", "👌"),
        ("point_up", "☝️"),
        ("point_right", "👉"),
        ("muscle", "💪"),
        ("+1", "👍"),
        ("thumbsup", "👍"),
        ("-1", "👎"),
        ("thumbsdown", "👎"),
        ("eyes", "👀"),
        ("heart", "❤️"),
        ("broken_heart", "💔"),
        ("tada", "🎉"),
        ("confetti_ball", "🎊"),
        ("rocket", "🚀"),
        ("fire", "🔥"),
        ("sparkles", "✨"),
        ("star", "⭐"),
        ("zap", "⚡"),
        ("boom", "💥"),
        ("100", "💯"),
        ("white_check_mark", "✅"),
        ("heavy_check_mark", "✔️"),
        ("x", "❌"),
        ("warning", "⚠️"),
        ("question", "❓"),
        ("exclamation", "❗"),
        ("bulb", "💡"),
        ("memo", "📝"),
        ("book", "📖"),
        ("package", "📦"),
        ("wrench", "🔧"),
        ("hammer", "🔨"),
        ("gear", "⚙️"),
        ("bug", "🐛"),
        ("beetle", "🪲"),
        ("lock", "🔒"),
        ("key", "🔑"),
        ("mag", "🔍"),
        ("bell", "🔔"),
        ("calendar", "📅"),
        ("chart_with_upwards_trend", "📈"),
        ("chart_with_downwards_trend", "📉"),
        ("clipboard", "📋"),
        ("pushpin", "📌"),
        ("link", "🔗"),
        ("email", "✉️"),
        ("phone", "☎️"),
        ("computer", "💻"),
        ("keyboard", "⌨️"),
        ("coffee", "☕"),
        ("tea", "🍵"),
        ("beer", "🍺"),
        ("beers", "🍻"),
        ("pizza", "🍕"),
        ("cake", "🍰"),
        ("birthday", "🎂"),
        ("doughnut", "🍩"),
        ("apple", "🍎"),
        ("banana", "🍌"),
        ("dog", "🐶"),
        ("cat", "🐱"),
        ("turtle", "🐢"),
        ("snake", "🐍"),
        ("crab", "🦀"),
        ("penguin", "🐧"),
        ("unicorn_face", "🦄"),
        ("sun_with_face", "🌞"),
        ("rainbow", "🌈"),
        ("cloud", "☁️"),
        ("umbrella", "☔"),
        ("snowflake", "❄️"),
        ("earth_africa", "🌍"),
        ("moon", "🌔"),
        ("wavy_dash", "〰️"),
        ("hourglass", "⌛"),
        ("alarm_clock", "⏰"),
        ("checkered_flag", "🏁"),
        ("trophy", "🏆"),
        ("dart", "🎯"),
        ("game_die", "🎲"),
        ("musical_note", "🎵"),
        ("art", "🎨"),
        ("camera", "📷"),
        ("moneybag", "💰"),
        ("gem", "💎"),
        ("ghost", "👻"),
        ("skull", "💀"),
        ("robot_face", "🤖"),
        ("alien", "👽"),
        ("wastebasket", "🗑️"),
        ("no_entry", "⛔"),
        ("recycle", "♻️"),
        ("hourglass_flowing_sand", "⏳"),
    ])
});

/// Look up the canonical glyph for a shortcode name, if known.
pub(crate) fn glyph(name: &str) -> Option<&'static str> {
    SHORTCODES.get(name).copied()
}
