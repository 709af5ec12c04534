//! Deterministic native-language response templates.
//!
//! These are the last line of defense against language leakage: whenever the
//! completion service fails or its output still contains Latin-script runs
//! for a non-English target, the selector answers from this table instead.
//! Every non-English template must be free of runs of three or more Latin
//! letters (digits such as "108" are fine); a test enforces this.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Symptom bucket a template answers. Selected by keyword from the
/// patient's raw input; `Default` asks for more detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    ChestPain,
    Headache,
    Fever,
    BodyAche,
    Cough,
    Diarrhea,
    Default,
}

const TEMPLATE_KEYWORDS: &[(TemplateKey, &[&str])] = &[
    (
        TemplateKey::ChestPain,
        &[
            "chest", "seene", "chhati", "छाती", "सीने", "நெஞ்சு", "ఛాతీ", "ಎದೆ", "বুকে", "છાતી",
            "നെഞ്ച്",
        ],
    ),
    (
        TemplateKey::Headache,
        &[
            "headache",
            "sir dard",
            "सिरदर्द",
            "सिर में",
            "डोके",
            "doke",
            "thalaivali",
            "தலைவலி",
            "తలనొప్పి",
            "ತಲೆನೋವು",
            "মাথা",
            "માથા",
            "തലവേദന",
        ],
    ),
    (
        TemplateKey::Diarrhea,
        &[
            "diarrhea",
            "loose motion",
            "dast",
            "julabh",
            "jhada",
            "दस्त",
            "जुलाब",
            "வயிற்றுப்போக்கு",
            "விரேசனம்",
            "విరేచనాలు",
            "ಭೇದಿ",
            "পাতলা পায়খানা",
            "ઝાડા",
            "വയറിളക്കം",
        ],
    ),
    (
        TemplateKey::Cough,
        &[
            "cough", "khasi", "khokla", "खांसी", "खोकला", "இருமல்", "దగ్గు", "ಕೆಮ್ಮು", "কাশি", "ખાંસી",
            "ചുമ",
        ],
    ),
    (
        TemplateKey::Fever,
        &[
            "fever", "bukhar", "taap", "taav", "jwaram", "jwara", "kaichal", "बुखार", "ताप",
            "காய்ச்சல்", "జ్వరం", "ಜ್ವರ", "জ্বর", "તાવ", "പനി",
        ],
    ),
    (
        TemplateKey::BodyAche,
        &[
            "body ache",
            "body pain",
            "myalgia",
            "badan dard",
            "ang dukh",
            "बदन दर्द",
            "अंग दुख",
            "உடம்பு வலி",
            "ఒళ్లు నొప్పి",
            "মৈ ব্যথা",
            "ಮೈ ನೋವು",
            "ശരീരവേദന",
        ],
    ),
];

/// Pick the symptom bucket for the patient's raw input. Chest pain is
/// checked first; anything unmatched falls to `Default`.
pub fn template_key_for(text: &str) -> TemplateKey {
    let lower = text.to_lowercase();
    for (key, keywords) in TEMPLATE_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *key;
        }
    }
    TemplateKey::Default
}

/// Deterministic template response for a language and symptom bucket.
pub fn response(lang: Language, key: TemplateKey) -> &'static str {
    match lang {
        Language::Hindi => hindi(key),
        Language::Marathi => marathi(key),
        Language::Tamil => tamil(key),
        Language::Telugu => telugu(key),
        Language::Kannada => kannada(key),
        Language::Bengali => bengali(key),
        Language::Gujarati => gujarati(key),
        Language::Malayalam => malayalam(key),
        Language::English => english(key),
    }
}

fn hindi(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "छाती में दर्द गंभीर हो सकता है। क्या सांस लेने में तकलीफ, बाएं हाथ में दर्द या पसीना भी है? अगर हाँ, तो तुरंत 108 पर कॉल करें या नजदीकी अस्पताल जाएं।"
        }
        TemplateKey::Headache => {
            "समझ गया, आपको सिरदर्द है। यह कब से हो रहा है? दर्द तेज़ धड़कता हुआ है या हल्का? क्या उल्टी या चक्कर भी आ रहे हैं?"
        }
        TemplateKey::Fever => {
            "ठीक है, बुखार है। बुखार कितना है और कब से है? क्या ठंड लगकर आता है? खांसी, दर्द या उल्टी भी है क्या?"
        }
        TemplateKey::BodyAche => {
            "पूरे बदन में दर्द है। क्या बुखार भी है? कब से तकलीफ है? फिलहाल आराम करें और खूब पानी पिएं।"
        }
        TemplateKey::Cough => {
            "खांसी की समस्या है। सूखी खांसी है या कफ आता है? कब से है? बुखार भी है क्या?"
        }
        TemplateKey::Diarrhea => {
            "दस्त हो रहे हैं। आज कितनी बार हुए? पानी जैसे हैं या खून आ रहा है? थोड़ा-थोड़ा नमक-चीनी का घोल हर पंद्रह मिनट में पीते रहें।"
        }
        TemplateKey::Default => {
            "नमस्ते! मैं आपकी मदद करूंगा। कृपया विस्तार से बताएं: क्या तकलीफ है, कब से है, और कोई और लक्षण?"
        }
    }
}

fn marathi(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "छातीत दुखणे गंभीर असू शकते। श्वास घेण्यात त्रास, डाव्या हाताला दुखणे किंवा घाम येतो का? हो असेल तर लगेच 108 वर कॉल करा किंवा जवळच्या रुग्णालयात जा।"
        }
        TemplateKey::Headache => {
            "समजले, डोकेदुखी आहे। हे कधीपासून आहे? दुखणे तीव्र धडधडणारे की हलके? उलटी किंवा चक्कर येते का?"
        }
        TemplateKey::Fever => {
            "ठीक आहे, ताप आहे। ताप किती आहे आणि कधीपासून? थंडी वाजून ताप येतो का? खोकला, दुखणे किंवा उलटी आहे का?"
        }
        TemplateKey::BodyAche => {
            "सर्व अंगात दुखते आहे। ताप आहे का? कधीपासून त्रास आहे? सध्या विश्रांती घ्या आणि भरपूर पाणी प्या।"
        }
        TemplateKey::Cough => {
            "खोकल्याचा त्रास आहे। कोरडा खोकला की कफ येतो? कधीपासून आहे? ताप पण आहे का?"
        }
        TemplateKey::Diarrhea => {
            "जुलाब होत आहेत। आज किती वेळा झाले? पाण्यासारखे आहेत की रक्त येते? थोडे-थोडे मीठ-साखरेचे पाणी दर पंधरा मिनिटांनी घेत राहा।"
        }
        TemplateKey::Default => {
            "नमस्कार! मी तुमची मदत करेन। कृपया सविस्तर सांगा: काय त्रास आहे, कधीपासून आहे, आणखी काही लक्षणे?"
        }
    }
}

fn tamil(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "நெஞ்சு வலி தீவிரமாக இருக்கலாம். மூச்சு விட கஷ்டம், இடது கை வலி அல்லது வியர்வை இருக்கிறதா? ஆம் என்றால் உடனே 108 அழைக்கவும் அல்லது அருகிலுள்ள மருத்துவமனைக்குச் செல்லவும்."
        }
        TemplateKey::Headache => {
            "புரிந்தது, தலைவலி இருக்கிறது. எப்போது ஆரம்பித்தது? வலி கடுமையாக துடிக்கிறதா அல்லது லேசாக உள்ளதா? வாந்தி அல்லது தலைச்சுற்றல் இருக்கிறதா?"
        }
        TemplateKey::Fever => {
            "சரி, காய்ச்சல் இருக்கிறது. எவ்வளவு, எப்போதிலிருந்து? குளிருடன் வருகிறதா? இருமல், வலி அல்லது வாந்தி இருக்கிறதா?"
        }
        TemplateKey::BodyAche => {
            "உடம்பு முழுவதும் வலி இருக்கிறது. காய்ச்சல் இருக்கிறதா? எப்போதிலிருந்து? இப்போது ஓய்வு எடுத்து நிறைய தண்ணீர் குடியுங்கள்."
        }
        TemplateKey::Cough => {
            "இருமல் பிரச்சனை இருக்கிறது. உலர் இருமலா அல்லது சளி வருகிறதா? எப்போதிலிருந்து? காய்ச்சலும் இருக்கிறதா?"
        }
        TemplateKey::Diarrhea => {
            "வயிற்றுப்போக்கு இருக்கிறது. இன்று எத்தனை முறை? தண்ணீர் போல இருக்கிறதா அல்லது ரத்தம் வருகிறதா? கொஞ்சம் கொஞ்சமாக உப்பு-சர்க்கரை கரைசல் குடியுங்கள்."
        }
        TemplateKey::Default => {
            "வணக்கம்! நான் உங்களுக்கு உதவுகிறேன். தயவுசெய்து விரிவாக சொல்லுங்கள்: என்ன பிரச்சனை, எப்போதிலிருந்து, வேறு அறிகுறிகள் உண்டா?"
        }
    }
}

fn telugu(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "ఛాతీ నొప్పి తీవ్రంగా ఉండవచ్చు. ఊపిరి తీసుకోవడం కష్టం, ఎడమ చేయి నొప్పి లేదా చెమట ఉందా? అవును అయితే వెంటనే 108కి కాల్ చేయండి లేదా సమీప ఆసుపత్రికి వెళ్లండి."
        }
        TemplateKey::Headache => {
            "అర్థమైంది, తలనొప్పి ఉంది. ఎప్పటినుండి ఉంది? నొప్పి తీవ్రంగా కొట్టుకుంటుందా లేదా తేలికగా ఉందా? వాంతులు లేదా తలతిరగడం ఉందా?"
        }
        TemplateKey::Fever => {
            "సరే, జ్వరం ఉంది. ఎంత ఉంది, ఎప్పటినుండి? చలితో వస్తుందా? దగ్గు, నొప్పి లేదా వాంతులు ఉన్నాయా?"
        }
        TemplateKey::BodyAche => {
            "ఒళ్లంతా నొప్పులు ఉన్నాయి. జ్వరం ఉందా? ఎప్పటినుండి? ఇప్పుడు విశ్రాంతి తీసుకొని నీళ్లు ఎక్కువగా తాగండి."
        }
        TemplateKey::Cough => {
            "దగ్గు సమస్య ఉంది. పొడి దగ్గా లేదా కఫం వస్తుందా? ఎప్పటినుండి? జ్వరం కూడా ఉందా?"
        }
        TemplateKey::Diarrhea => {
            "విరేచనాలు అవుతున్నాయి. ఈరోజు ఎన్నిసార్లు? నీళ్లలా ఉన్నాయా లేదా రక్తం వస్తుందా? కొంచెం కొంచెం ఉప్పు-పంచదార ద్రావణం తాగుతూ ఉండండి."
        }
        TemplateKey::Default => {
            "నమస్కారం! నేను మీకు సహాయం చేస్తాను. దయచేసి వివరంగా చెప్పండి: ఏమి సమస్య, ఎప్పటినుండి, ఇంకా ఏమైనా లక్షణాలు?"
        }
    }
}

fn kannada(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "ಎದೆ ನೋವು ಗಂಭೀರವಾಗಿರಬಹುದು. ಉಸಿರಾಟದ ತೊಂದರೆ, ಎಡಗೈ ನೋವು ಅಥವಾ ಬೆವರು ಇದೆಯೇ? ಹೌದಾದರೆ ತಕ್ಷಣ 108 ಗೆ ಕರೆ ಮಾಡಿ ಅಥವಾ ಹತ್ತಿರದ ಆಸ್ಪತ್ರೆಗೆ ಹೋಗಿ."
        }
        TemplateKey::Headache => {
            "ಅರ್ಥವಾಯಿತು, ತಲೆನೋವು ಇದೆ. ಯಾವಾಗಿನಿಂದ ಇದೆ? ನೋವು ತೀವ್ರವೋ ಅಥವಾ ಹಗುರವೋ? ವಾಂತಿ ಅಥವಾ ತಲೆಸುತ್ತು ಇದೆಯೇ?"
        }
        TemplateKey::Fever => {
            "ಸರಿ, ಜ್ವರ ಇದೆ. ಎಷ್ಟು ಇದೆ, ಯಾವಾಗಿನಿಂದ? ಚಳಿಯೊಂದಿಗೆ ಬರುತ್ತದೆಯೇ? ಕೆಮ್ಮು, ನೋವು ಅಥವಾ ವಾಂತಿ ಇದೆಯೇ?"
        }
        TemplateKey::BodyAche => {
            "ಮೈಯೆಲ್ಲಾ ನೋವು ಇದೆ. ಜ್ವರ ಇದೆಯೇ? ಯಾವಾಗಿನಿಂದ? ಈಗ ವಿಶ್ರಾಂತಿ ತೆಗೆದುಕೊಂಡು ಸಾಕಷ್ಟು ನೀರು ಕುಡಿಯಿರಿ."
        }
        TemplateKey::Cough => {
            "ಕೆಮ್ಮಿನ ಸಮಸ್ಯೆ ಇದೆ. ಒಣ ಕೆಮ್ಮೋ ಅಥವಾ ಕಫ ಬರುತ್ತದೆಯೋ? ಯಾವಾಗಿನಿಂದ? ಜ್ವರವೂ ಇದೆಯೇ?"
        }
        TemplateKey::Diarrhea => {
            "ಭೇದಿ ಆಗುತ್ತಿದೆ. ಇಂದು ಎಷ್ಟು ಬಾರಿ? ನೀರಿನಂತೆ ಇದೆಯೇ ಅಥವಾ ರಕ್ತ ಬರುತ್ತಿದೆಯೇ? ಸ್ವಲ್ಪ ಸ್ವಲ್ಪ ಉಪ್ಪು-ಸಕ್ಕರೆ ದ್ರಾವಣ ಕುಡಿಯುತ್ತಿರಿ."
        }
        TemplateKey::Default => {
            "ನಮಸ್ಕಾರ! ನಾನು ನಿಮಗೆ ಸಹಾಯ ಮಾಡುತ್ತೇನೆ. ದಯವಿಟ್ಟು ವಿವರವಾಗಿ ಹೇಳಿ: ಏನು ತೊಂದರೆ, ಯಾವಾಗಿನಿಂದ, ಬೇರೆ ಲಕ್ಷಣಗಳು?"
        }
    }
}

fn bengali(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "বুকে ব্যথা গুরুতর হতে পারে। শ্বাস নিতে কষ্ট, বাঁ হাতে ব্যথা বা ঘাম হচ্ছে কি? হ্যাঁ হলে এখনই 108 নম্বরে কল করুন বা নিকটস্থ হাসপাতালে যান।"
        }
        TemplateKey::Headache => {
            "বুঝলাম, মাথা ব্যথা আছে। কবে থেকে হচ্ছে? ব্যথা তীব্র দপদপ করা না হালকা? বমি বা মাথা ঘোরা আছে কি?"
        }
        TemplateKey::Fever => {
            "ঠিক আছে, জ্বর আছে। কত জ্বর, কবে থেকে? কাঁপুনি দিয়ে আসে কি? কাশি, ব্যথা বা বমি আছে কি?"
        }
        TemplateKey::BodyAche => {
            "সারা গায়ে ব্যথা। জ্বর আছে কি? কবে থেকে? এখন বিশ্রাম নিন আর প্রচুর জল পান করুন।"
        }
        TemplateKey::Cough => {
            "কাশির সমস্যা আছে। শুকনো কাশি না কফ ওঠে? কবে থেকে? জ্বরও আছে কি?"
        }
        TemplateKey::Diarrhea => {
            "পাতলা পায়খানা হচ্ছে। আজ কতবার হয়েছে? জলের মতো না রক্ত আসছে? অল্প অল্প করে নুন-চিনির জল খেতে থাকুন।"
        }
        TemplateKey::Default => {
            "নমস্কার! আমি আপনাকে সাহায্য করব। দয়া করে বিস্তারিত বলুন: কী সমস্যা, কবে থেকে, আর কোনো লক্ষণ?"
        }
    }
}

fn gujarati(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "છાતીમાં દુખાવો ગંભીર હોઈ શકે છે. શ્વાસ લેવામાં તકલીફ, ડાબા હાથમાં દુખાવો કે પરસેવો થાય છે? હા હોય તો તરત 108 પર કૉલ કરો અથવા નજીકની હોસ્પિટલમાં જાઓ."
        }
        TemplateKey::Headache => {
            "સમજાયું, માથાનો દુખાવો છે. ક્યારથી છે? દુખાવો તીવ્ર ધબકતો છે કે હળવો? ઉલટી કે ચક્કર આવે છે?"
        }
        TemplateKey::Fever => {
            "ઠીક છે, તાવ છે. કેટલો છે, ક્યારથી? ઠંડી સાથે આવે છે? ખાંસી, દુખાવો કે ઉલટી છે?"
        }
        TemplateKey::BodyAche => {
            "આખા શરીરમાં દુખાવો છે. તાવ છે? ક્યારથી? હમણાં આરામ કરો અને પુષ્કળ પાણી પીવો."
        }
        TemplateKey::Cough => {
            "ખાંસીની સમસ્યા છે. સૂકી ખાંસી છે કે કફ આવે છે? ક્યારથી? તાવ પણ છે?"
        }
        TemplateKey::Diarrhea => {
            "ઝાડા થાય છે. આજે કેટલી વાર થયા? પાણી જેવા છે કે લોહી આવે છે? થોડું થોડું મીઠું-ખાંડનું પાણી પીતા રહો."
        }
        TemplateKey::Default => {
            "નમસ્તે! હું તમારી મદદ કરીશ. કૃપા કરીને વિગતવાર જણાવો: શું તકલીફ છે, ક્યારથી છે, બીજાં કોઈ લક્ષણો?"
        }
    }
}

fn malayalam(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "നെഞ്ചുവേദന ഗുരുതരമാകാം. ശ്വാസതടസ്സം, ഇടത് കൈ വേദന അല്ലെങ്കിൽ വിയർപ്പ് ഉണ്ടോ? ഉണ്ടെങ്കിൽ ഉടൻ 108-ലേക്ക് വിളിക്കുക അല്ലെങ്കിൽ അടുത്തുള്ള ആശുപത്രിയിലേക്ക് പോകുക."
        }
        TemplateKey::Headache => {
            "മനസ്സിലായി, തലവേദന ഉണ്ട്. എപ്പോൾ മുതൽ? വേദന ശക്തമായി മിടിക്കുന്നതാണോ അതോ നേരിയതാണോ? ഛർദ്ദി അല്ലെങ്കിൽ തലകറക്കം ഉണ്ടോ?"
        }
        TemplateKey::Fever => {
            "ശരി, പനി ഉണ്ട്. എത്രയുണ്ട്, എപ്പോൾ മുതൽ? കുളിരോടെ വരുന്നുണ്ടോ? ചുമ, വേദന അല്ലെങ്കിൽ ഛർദ്ദി ഉണ്ടോ?"
        }
        TemplateKey::BodyAche => {
            "ശരീരം മുഴുവൻ വേദനയുണ്ട്. പനി ഉണ്ടോ? എപ്പോൾ മുതൽ? ഇപ്പോൾ വിശ്രമിക്കുക, ധാരാളം വെള്ളം കുടിക്കുക."
        }
        TemplateKey::Cough => {
            "ചുമയുടെ പ്രശ്നമുണ്ട്. വരണ്ട ചുമയാണോ അതോ കഫം വരുന്നുണ്ടോ? എപ്പോൾ മുതൽ? പനിയും ഉണ്ടോ?"
        }
        TemplateKey::Diarrhea => {
            "വയറിളക്കം ഉണ്ട്. ഇന്ന് എത്ര തവണ? വെള്ളം പോലെയാണോ അതോ രക്തം വരുന്നുണ്ടോ? കുറേശ്ശെ ഉപ്പ്-പഞ്ചസാര ലായനി കുടിച്ചുകൊണ്ടിരിക്കുക."
        }
        TemplateKey::Default => {
            "നമസ്കാരം! ഞാൻ നിങ്ങളെ സഹായിക്കാം. ദയവായി വിശദമായി പറയുക: എന്താണ് പ്രശ്നം, എപ്പോൾ മുതൽ, മറ്റ് ലക്ഷണങ്ങൾ?"
        }
    }
}

fn english(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::ChestPain => {
            "Chest pain can be serious. Do you also have trouble breathing, pain in the left arm, or sweating? If yes, call 108 immediately or go to the nearest hospital."
        }
        _ => {
            "I understand your symptoms. Could you tell me more about how long you've been feeling this way and whether you have any other concerns?"
        }
    }
}

/// Greeting in the patient's language.
pub fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => "नमस्ते! मैं आपकी कैसे मदद कर सकता हूँ?",
        Language::Marathi => "नमस्कार! मी तुमची कशी मदत करू शकतो?",
        Language::Tamil => "வணக்கம்! நான் உங்களுக்கு எப்படி உதவ முடியும்?",
        Language::Telugu => "నమస్కారం! నేను మీకు ఎలా సహాయం చేయగలను?",
        Language::Kannada => "ನಮಸ್ಕಾರ! ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
        Language::Bengali => "নমস্কার! আমি আপনাকে কিভাবে সাহায্য করতে পারি?",
        Language::Gujarati => "નમસ્તે! હું તમારી કેવી રીતે મદદ કરી શકું?",
        Language::Malayalam => "നമസ്കാരം! ഞാൻ നിങ്ങളെ എങ്ങനെ സഹായിക്കും?",
        Language::English => "Hello! How can I help you today?",
    }
}

/// Emergency call-to-action in the patient's language.
pub fn emergency_message(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => "आपातकालीन स्थिति! कृपया तुरंत 108 पर कॉल करें या नजदीकी अस्पताल जाएं।",
        Language::Marathi => "आणीबाणी! कृपया लगेच 108 वर कॉल करा किंवा जवळच्या रुग्णालयात जा.",
        Language::Tamil => "அவசரம்! உடனடியாக 108 அழைக்கவும் அல்லது அருகிலுள்ள மருத்துவமனைக்குச் செல்லவும்.",
        Language::Telugu => "అత్యవసర పరిస్థితి! వెంటనే 108కి కాల్ చేయండి లేదా సమీపంలోని ఆసుపత్రికి వెళ్ళండి.",
        Language::Kannada => "ತುರ್ತು! ತಕ್ಷಣ 108 ಗೆ ಕರೆ ಮಾಡಿ ಅಥವಾ ಹತ್ತಿರದ ಆಸ್ಪತ್ರೆಗೆ ಹೋಗಿ.",
        Language::Bengali => "জরুরি অবস্থা! অনুগ্রহ করে এখনই 108 এ কল করুন বা নিকটস্থ হাসপাতালে যান।",
        Language::Gujarati => "કટોકટી! કૃપા કરીને તરત જ 108 પર કૉલ કરો અથવા નજીકની હોસ્પિટલમાં જાઓ.",
        Language::Malayalam => "അടിയന്തിരാവസ്ഥ! ഉടൻ 108-ലേക്ക് വിളിക്കുക അല്ലെങ്കിൽ അടുത്തുള്ള ആശുപത്രിയിലേക്ക് പോകുക.",
        Language::English => "EMERGENCY! Please call 108 immediately or go to the nearest hospital.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::INDIAN_LANGUAGES;

    const ALL_KEYS: [TemplateKey; 7] = [
        TemplateKey::ChestPain,
        TemplateKey::Headache,
        TemplateKey::Fever,
        TemplateKey::BodyAche,
        TemplateKey::Cough,
        TemplateKey::Diarrhea,
        TemplateKey::Default,
    ];

    fn has_latin_run(text: &str) -> bool {
        let mut run = 0usize;
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                run += 1;
                if run >= 3 {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }

    #[test]
    fn indian_templates_are_free_of_latin_runs() {
        for lang in INDIAN_LANGUAGES {
            for key in ALL_KEYS {
                let text = response(lang, key);
                assert!(
                    !has_latin_run(text),
                    "{lang:?}/{key:?} leaks Latin script: {text}"
                );
            }
        }
    }

    #[test]
    fn indian_templates_and_messages_are_nonempty() {
        for lang in INDIAN_LANGUAGES {
            for key in ALL_KEYS {
                assert!(!response(lang, key).is_empty());
            }
            assert!(!greeting(lang).is_empty());
            assert!(!emergency_message(lang).is_empty());
        }
    }

    #[test]
    fn keyword_selection_prefers_chest_pain() {
        assert_eq!(
            template_key_for("mujhe chest pain aur bukhar hai"),
            TemplateKey::ChestPain
        );
        assert_eq!(template_key_for("सिर में दर्द है"), TemplateKey::Headache);
        assert_eq!(template_key_for("dast lag gaye"), TemplateKey::Diarrhea);
        assert_eq!(template_key_for("kuch theek nahi lagta"), TemplateKey::Default);
    }
}
