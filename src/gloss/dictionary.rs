/*!
 * Static gloss vocabulary.
 *
 * The closed dictionary mapping normalized English words to canonical
 * sign glosses, plus a synonym table folding alternate surface forms
 * onto the same gloss. This is the entire vocabulary the translator
 * knows; there is no dynamic insertion.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Direct word-to-gloss mapping. Keys are lowercase normalized tokens,
/// values are canonical uppercase gloss identifiers.
pub static DICTIONARY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Greetings and courtesy
        ("hello", "HELLO"),
        ("namaste", "NAMASTE"),
        ("welcome", "WELCOME"),
        ("bye", "BYE"),
        ("please", "PLEASE"),
        ("sorry", "SORRY"),
        ("thank", "THANK"),
        ("thanks", "THANK"),
        ("excuse", "EXCUSE"),
        // Identity and people
        ("my", "MY"),
        ("your", "YOUR"),
        ("name", "NAME"),
        ("is", "IS"),
        ("am", "AM"),
        ("are", "ARE"),
        ("you", "YOU"),
        ("we", "WE"),
        ("they", "THEY"),
        ("mother", "MOTHER"),
        ("father", "FATHER"),
        ("sister", "SISTER"),
        ("brother", "BROTHER"),
        ("family", "FAMILY"),
        ("friend", "FRIEND"),
        ("teacher", "TEACHER"),
        ("student", "STUDENT"),
        ("doctor", "DOCTOR"),
        ("baby", "BABY"),
        ("man", "MAN"),
        ("woman", "WOMAN"),
        // Question words
        ("what", "WHAT"),
        ("where", "WHERE"),
        ("when", "WHEN"),
        ("who", "WHO"),
        ("why", "WHY"),
        ("how", "HOW"),
        ("which", "WHICH"),
        // Time
        ("time", "TIME"),
        ("today", "TODAY"),
        ("tomorrow", "TOMORROW"),
        ("yesterday", "YESTERDAY"),
        ("morning", "MORNING"),
        ("afternoon", "AFTERNOON"),
        ("evening", "EVENING"),
        ("night", "NIGHT"),
        ("now", "NOW"),
        ("later", "LATER"),
        ("day", "DAY"),
        ("week", "WEEK"),
        ("month", "MONTH"),
        ("year", "YEAR"),
        // Common verbs
        ("go", "GO"),
        ("going", "GO"),
        ("come", "COME"),
        ("stop", "STOP"),
        ("wait", "WAIT"),
        ("help", "HELP"),
        ("want", "WANT"),
        ("need", "NEED"),
        ("have", "HAVE"),
        ("like", "LIKE"),
        ("love", "LOVE"),
        ("know", "KNOW"),
        ("think", "THINK"),
        ("understand", "UNDERSTAND"),
        ("work", "WORK"),
        ("play", "PLAY"),
        ("eat", "EAT"),
        ("drink", "DRINK"),
        ("sleep", "SLEEP"),
        ("read", "READ"),
        ("write", "WRITE"),
        ("learn", "LEARN"),
        ("teach", "TEACH"),
        ("speak", "SPEAK"),
        ("listen", "LISTEN"),
        ("look", "LOOK"),
        ("see", "SEE"),
        ("show", "SHOW"),
        ("tell", "TELL"),
        ("give", "GIVE"),
        ("take", "TAKE"),
        ("meet", "MEET"),
        ("sit", "SIT"),
        ("stand", "STAND"),
        ("walk", "WALK"),
        ("run", "RUN"),
        // Common nouns
        ("house", "HOUSE"),
        ("home", "HOME"),
        ("school", "SCHOOL"),
        ("water", "WATER"),
        ("food", "FOOD"),
        ("milk", "MILK"),
        ("tea", "TEA"),
        ("book", "BOOK"),
        ("pen", "PEN"),
        ("money", "MONEY"),
        ("phone", "PHONE"),
        ("bus", "BUS"),
        ("train", "TRAIN"),
        ("hospital", "HOSPITAL"),
        ("market", "MARKET"),
        ("temple", "TEMPLE"),
        ("church", "CHURCH"),
        ("mosque", "MOSQUE"),
        ("india", "INDIA"),
        ("sign", "SIGN"),
        ("language", "LANGUAGE"),
        // Qualities and states
        ("good", "GOOD"),
        ("bad", "BAD"),
        ("happy", "HAPPY"),
        ("sad", "SAD"),
        ("fine", "FINE"),
        ("well", "FINE"),
        ("big", "BIG"),
        ("small", "SMALL"),
        ("hot", "HOT"),
        ("cold", "COLD"),
        ("new", "NEW"),
        ("old", "OLD"),
        ("beautiful", "BEAUTIFUL"),
        ("important", "IMPORTANT"),
        ("hungry", "HUNGRY"),
        ("thirsty", "THIRSTY"),
        ("tired", "TIRED"),
        ("sick", "SICK"),
        // Affirmation and negation
        ("yes", "YES"),
        ("no", "NO"),
        ("not", "NOT"),
        ("ok", "OK"),
        ("okay", "OK"),
        ("nice", "NICE"),
        ("again", "AGAIN"),
        ("slow", "SLOW"),
        ("fast", "FAST"),
        ("here", "HERE"),
        ("there", "THERE"),
        ("this", "THIS"),
        ("that", "THAT"),
    ]
    .into_iter()
    .collect()
});

/// Synonym folding table. Keys are surface tokens absent from the direct
/// dictionary; values are the dictionary word whose gloss they share.
pub static SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("hi", "hello"),
        ("hey", "hello"),
        ("goodbye", "bye"),
        ("mom", "mother"),
        ("mum", "mother"),
        ("mommy", "mother"),
        ("dad", "father"),
        ("daddy", "father"),
        ("papa", "father"),
        ("pal", "friend"),
        ("buddy", "friend"),
        ("kid", "baby"),
        ("child", "baby"),
        ("residence", "house"),
        ("college", "school"),
        ("university", "school"),
        ("cash", "money"),
        ("mobile", "phone"),
        ("telephone", "phone"),
        ("great", "good"),
        ("glad", "happy"),
        ("unhappy", "sad"),
        ("large", "big"),
        ("little", "small"),
        ("quick", "fast"),
        ("quickly", "fast"),
        ("slowly", "slow"),
        ("assist", "help"),
        ("desire", "want"),
        ("adore", "love"),
        ("comprehend", "understand"),
        ("observe", "look"),
        ("watch", "look"),
        ("halt", "stop"),
        ("begin", "go"),
        ("currently", "now"),
        ("presently", "now"),
    ]
    .into_iter()
    .collect()
});

/// Look up the canonical gloss for a lowercase token, folding through the
/// synonym table when the direct dictionary misses.
pub fn lookup(token: &str) -> Option<&'static str> {
    if let Some(gloss) = DICTIONARY.get(token) {
        return Some(gloss);
    }
    SYNONYMS
        .get(token)
        .and_then(|folded| DICTIONARY.get(folded))
        .copied()
}
