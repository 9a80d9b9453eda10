use super::catalogue::LanguageEntry;

const fn lang(
    code: &'static str,
    international_name: &'static str,
    local_name: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        code,
        local_name,
        international_name,
    }
}

// ISO 639-1, ordered by international name
pub static ALL: &[LanguageEntry] = &[
    lang("ab", "Abkhaz", "Аҧсуа"),
    lang("aa", "Afar", "Afaraf"),
    lang("af", "Afrikaans", "Afrikaans"),
    lang("ak", "Akan", "Akan"),
    lang("sq", "Albanian", "Shqip"),
    lang("am", "Amharic", "አማርኛ"),
    lang("ar", "Arabic", "العربية"),
    lang("an", "Aragonese", "Aragonés"),
    lang("hy", "Armenian", "Հայերեն"),
    lang("as", "Assamese", "অসমীয়া"),
    lang("av", "Avaric", "Авар"),
    lang("ae", "Avestan", "avesta"),
    lang("ay", "Aymara", "Aymar"),
    lang("az", "Azerbaijani", "Azərbaycanca"),
    lang("bm", "Bambara", "Bamanankan"),
    lang("ba", "Bashkir", "Башҡортса"),
    lang("eu", "Basque", "Euskara"),
    lang("be", "Belarusian", "Беларуская"),
    lang("bn", "Bengali", "বাংলা"),
    lang("bh", "Bihari", "भोजपुरी"),
    lang("bi", "Bislama", "Bislama"),
    lang("bs", "Bosnian", "Bosanski"),
    lang("br", "Breton", "Brezhoneg"),
    lang("bg", "Bulgarian", "Български"),
    lang("my", "Burmese", "မြန်မာဘာသာ"),
    lang("ca", "Catalan", "Català"),
    lang("ch", "Chamorro", "Chamoru"),
    lang("ce", "Chechen", "Нохчийн"),
    lang("ny", "Chichewa", "Chichewa"),
    lang("zh", "Chinese", "中文"),
    lang("cv", "Chuvash", "Чӑвашла"),
    lang("kw", "Cornish", "Kernewek"),
    lang("co", "Corsican", "Corsu"),
    lang("cr", "Cree", "ᓀᐦᐃᔭᐍᐏᐣ"),
    lang("hr", "Croatian", "Hrvatski"),
    lang("cs", "Czech", "Čeština"),
    lang("da", "Danish", "Dansk"),
    lang("dv", "Divehi", "Divehi"),
    lang("nl", "Dutch", "Nederlands"),
    lang("dz", "Dzongkha", "རྫོང་ཁ"),
    lang("en", "English", "English"),
    lang("eo", "Esperanto", "Esperanto"),
    lang("et", "Estonian", "Eesti"),
    lang("ee", "Ewe", "Eʋegbe"),
    lang("fo", "Faroese", "Føroyskt"),
    lang("fj", "Fijian", "Na Vosa Vaka-Viti"),
    lang("fi", "Finnish", "Suomi"),
    lang("fr", "French", "Français"),
    lang("ff", "Fula", "Fulfulde"),
    lang("gl", "Galician", "Galego"),
    lang("ka", "Georgian", "ქართული"),
    lang("de", "German", "Deutsch"),
    lang("el", "Greek", "Ελληνικά"),
    lang("gn", "Guaraní", "Avañe'ẽ"),
    lang("gu", "Gujarati", "ગુજરાતી"),
    lang("ht", "Haitian", "Kreyòl Ayisyen"),
    lang("ha", "Hausa", "هَوُسَ"),
    lang("he", "Hebrew", "עברית"),
    lang("hz", "Herero", "Otjiherero"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("ho", "Hiri Motu", "Hiri Motu"),
    lang("hu", "Hungarian", "Magyar"),
    lang("ia", "Interlingua", "Interlingua"),
    lang("id", "Indonesian", "Bahasa Indonesia"),
    lang("ie", "Interlingue", "Interlingue"),
    lang("ga", "Irish", "Gaeilge"),
    lang("ig", "Igbo", "Igbo"),
    lang("ik", "Inupiaq", "Iñupiak"),
    lang("io", "Ido", "Ido"),
    lang("is", "Icelandic", "Íslenska"),
    lang("it", "Italian", "Italiano"),
    lang("iu", "Inuktitut", "ᐃᓄᒃᑎᑐᑦ"),
    lang("ja", "Japanese", "日本語"),
    lang("jv", "Javanese", "Basa Jawa"),
    lang("kl", "Kalaallisut", "Kalaallisut"),
    lang("kn", "Kannada", "ಕನ್ನಡ"),
    lang("kr", "Kanuri", "Kanuri"),
    lang("ks", "Kashmiri", "كشميري"),
    lang("kk", "Kazakh", "Қазақша"),
    lang("km", "Khmer", "ភាសាខ្មែរ"),
    lang("ki", "Kikuyu", "Gĩkũyũ"),
    lang("rw", "Kinyarwanda", "Kinyarwanda"),
    lang("ky", "Kyrgyz", "Кыргызча"),
    lang("kv", "Komi", "Коми"),
    lang("kg", "Kongo", "Kongo"),
    lang("ko", "Korean", "한국어"),
    lang("ku", "Kurdish", "Kurdî"),
    lang("kj", "Kwanyama", "Kuanyama"),
    lang("la", "Latin", "Latina"),
    lang("lb", "Luxembourgish", "Lëtzebuergesch"),
    lang("lg", "Luganda", "Luganda"),
    lang("li", "Limburgish", "Limburgs"),
    lang("ln", "Lingala", "Lingála"),
    lang("lo", "Lao", "ພາສາລາວ"),
    lang("lt", "Lithuanian", "Lietuvių"),
    lang("lu", "Luba-Katanga", "Tshiluba"),
    lang("lv", "Latvian", "Latviešu"),
    lang("gv", "Manx", "Gaelg"),
    lang("mk", "Macedonian", "Македонски"),
    lang("mg", "Malagasy", "Malagasy"),
    lang("ms", "Malay", "Bahasa Melayu"),
    lang("ml", "Malayalam", "മലയാളം"),
    lang("mt", "Maltese", "Malti"),
    lang("mi", "Māori", "Māori"),
    lang("mr", "Marathi", "मराठी"),
    lang("mh", "Marshallese", "Kajin M̧ajeļ"),
    lang("mn", "Mongolian", "Монгол"),
    lang("na", "Nauru", "Dorerin Naoero"),
    lang("nv", "Navajo", "Diné Bizaad"),
    lang("nb", "Norwegian Bokmål", "Norsk (Bokmål)"),
    lang("nd", "North Ndebele", "Sindebele"),
    lang("ne", "Nepali", "नेपाली"),
    lang("ng", "Ndonga", "Owambo"),
    lang("nn", "Norwegian Nynorsk", "Norsk (Nynorsk)"),
    lang("no", "Norwegian", "Norsk"),
    lang("ii", "Nuosu", "ꆈꌠ꒿ Nuosuhxop"),
    lang("nr", "South Ndebele", "isiNdebele"),
    lang("oc", "Occitan", "Occitan"),
    lang("oj", "Ojibwe", "ᐊᓂᔑᓈᐯᒧᐎᓐ"),
    lang("cu", "Old Church Slavonic", "Словѣ́ньскъ"),
    lang("om", "Oromo", "Afaan Oromoo"),
    lang("or", "Oriya", "ଓଡି଼ଆ"),
    lang("os", "Ossetian", "Ирон æвзаг"),
    lang("pa", "Panjabi", "ਪੰਜਾਬੀ"),
    lang("pi", "Pāli", "पाऴि"),
    lang("fa", "Persian", "فارسی"),
    lang("pl", "Polish", "Polski"),
    lang("ps", "Pashto", "پښتو"),
    lang("pt", "Portuguese", "Português"),
    lang("qu", "Quechua", "Runa Simi"),
    lang("rm", "Romansh", "Rumantsch"),
    lang("rn", "Kirundi", "Kirundi"),
    lang("ro", "Romanian", "Română"),
    lang("ru", "Russian", "Русский"),
    lang("sa", "Sanskrit", "संस्कृतम्"),
    lang("sc", "Sardinian", "Sardu"),
    lang("sd", "Sindhi", "सिन्धी"),
    lang("se", "Northern Sami", "Sámegiella"),
    lang("sm", "Samoan", "Gagana Sāmoa"),
    lang("sg", "Sango", "Sängö"),
    lang("sr", "Serbian", "Српски"),
    lang("gd", "Gaelic", "Gàidhlig"),
    lang("sn", "Shona", "ChiShona"),
    lang("si", "Sinhala", "සිංහල"),
    lang("sk", "Slovak", "Slovenčina"),
    lang("sl", "Slovene", "Slovenščina"),
    lang("so", "Somali", "Soomaaliga"),
    lang("st", "Southern Sotho", "Sesotho"),
    lang("es", "Spanish", "Español"),
    lang("su", "Sundanese", "Basa Sunda"),
    lang("sw", "Swahili", "Kiswahili"),
    lang("ss", "Swati", "SiSwati"),
    lang("sv", "Swedish", "Svenska"),
    lang("ta", "Tamil", "தமிழ்"),
    lang("te", "Telugu", "తెలుగు"),
    lang("tg", "Tajik", "Тоҷикӣ"),
    lang("th", "Thai", "ภาษาไทย"),
    lang("ti", "Tigrinya", "ትግርኛ"),
    lang("bo", "Tibetan Standard", "བོད་ཡིག"),
    lang("tk", "Turkmen", "Türkmençe"),
    lang("tl", "Tagalog", "Tagalog"),
    lang("tn", "Tswana", "Setswana"),
    lang("to", "Tonga", "faka Tonga"),
    lang("tr", "Turkish", "Türkçe"),
    lang("ts", "Tsonga", "Xitsonga"),
    lang("tt", "Tatar", "Татарча"),
    lang("tw", "Twi", "Twi"),
    lang("ty", "Tahitian", "Reo Mā’ohi"),
    lang("ug", "Uyghur", "ئۇيغۇرچه"),
    lang("uk", "Ukrainian", "Українська"),
    lang("ur", "Urdu", "اردو"),
    lang("uz", "Uzbek", "O‘zbek"),
    lang("ve", "Venda", "Tshivenḓa"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
    lang("vo", "Volapük", "Volapük"),
    lang("wa", "Walloon", "Walon"),
    lang("cy", "Welsh", "Cymraeg"),
    lang("wo", "Wolof", "Wolof"),
    lang("fy", "Western Frisian", "Frysk"),
    lang("xh", "Xhosa", "isiXhosa"),
    lang("yi", "Yiddish", "ייִדיש"),
    lang("yo", "Yoruba", "Yorùbá"),
    lang("za", "Zhuang", "Cuengh"),
    lang("zu", "Zulu", "isiZulu"),
];

/// Looks up an entry by its (already normalized) two-letter code.
pub fn find(code: &str) -> Option<&'static LanguageEntry> {
    ALL.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in ALL {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
            assert_eq!(entry.code, entry.code.to_lowercase());
            assert_eq!(entry.code.len(), 2);
        }
    }

    #[test]
    fn find_known_code() {
        let fr = find("fr").unwrap();
        assert_eq!(fr.local_name, "Français");
        assert_eq!(fr.international_name, "French");
        assert!(find("xx").is_none());
    }
}
