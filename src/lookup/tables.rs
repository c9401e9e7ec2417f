//! Bundled numbering-plan tables: geographic area codes, mobile carrier
//! ranges and country display names.
//!
//! Keys are the country calling code plus leading digits of the national
//! significant number. Lookups pick the longest matching prefix.

// ─── Geographic area codes ──────────────────────────────────────

struct AreaCode {
    country_code: u16,
    prefixes: &'static [&'static str],
    description: &'static str,
}

const fn area(
    country_code: u16,
    prefixes: &'static [&'static str],
    description: &'static str,
) -> AreaCode {
    AreaCode {
        country_code,
        prefixes,
        description,
    }
}

const AREA_CODES: &[AreaCode] = &[
    // Kenya
    area(254, &["20"], "Nairobi, Kenya"),
    area(254, &["41"], "Mombasa, Kenya"),
    area(254, &["57"], "Kisumu, Kenya"),
    area(254, &["51"], "Nakuru, Kenya"),
    area(254, &["53"], "Eldoret, Kenya"),
    area(254, &["61"], "Nyeri, Kenya"),
    // Nigeria
    area(234, &["1"], "Lagos, Nigeria"),
    area(234, &["9"], "Abuja, Nigeria"),
    // Uganda, Tanzania, Ghana
    area(256, &["41"], "Kampala, Uganda"),
    area(255, &["22"], "Dar es Salaam, Tanzania"),
    area(233, &["30"], "Accra, Ghana"),
    // South Africa
    area(27, &["11"], "Johannesburg, South Africa"),
    area(27, &["12"], "Pretoria, South Africa"),
    area(27, &["21"], "Cape Town, South Africa"),
    area(27, &["31"], "Durban, South Africa"),
    // Egypt
    area(20, &["2"], "Cairo, Egypt"),
    area(20, &["3"], "Alexandria, Egypt"),
    // United Kingdom
    area(44, &["20"], "London, United Kingdom"),
    area(44, &["121"], "Birmingham, United Kingdom"),
    area(44, &["161"], "Manchester, United Kingdom"),
    area(44, &["113"], "Leeds, United Kingdom"),
    area(44, &["117"], "Bristol, United Kingdom"),
    area(44, &["151"], "Liverpool, United Kingdom"),
    area(44, &["131"], "Edinburgh, United Kingdom"),
    area(44, &["141"], "Glasgow, United Kingdom"),
    area(44, &["29"], "Cardiff, United Kingdom"),
    area(44, &["28"], "Belfast, United Kingdom"),
    // North America
    area(
        1,
        &["212", "332", "646", "917"],
        "New York, NY, United States",
    ),
    area(1, &["213", "310", "323"], "Los Angeles, CA, United States"),
    area(1, &["312", "773"], "Chicago, IL, United States"),
    area(1, &["415", "628"], "San Francisco, CA, United States"),
    area(1, &["202"], "Washington, DC, United States"),
    area(1, &["305", "786"], "Miami, FL, United States"),
    area(1, &["713", "832"], "Houston, TX, United States"),
    area(1, &["206"], "Seattle, WA, United States"),
    area(1, &["617"], "Boston, MA, United States"),
    area(1, &["404", "470", "678"], "Atlanta, GA, United States"),
    area(1, &["416", "647", "437"], "Toronto, ON, Canada"),
    area(1, &["514", "438"], "Montreal, QC, Canada"),
    area(1, &["604", "778"], "Vancouver, BC, Canada"),
    // Europe
    area(49, &["30"], "Berlin, Germany"),
    area(49, &["40"], "Hamburg, Germany"),
    area(49, &["89"], "Munich, Germany"),
    area(49, &["69"], "Frankfurt am Main, Germany"),
    area(33, &["1"], "Paris, France"),
    area(46, &["8"], "Stockholm, Sweden"),
    area(46, &["31"], "Gothenburg, Sweden"),
    area(46, &["40"], "Malmö, Sweden"),
    // Middle East and South Asia
    area(966, &["11"], "Riyadh, Saudi Arabia"),
    area(966, &["12"], "Jeddah, Saudi Arabia"),
    area(971, &["4"], "Dubai, United Arab Emirates"),
    area(971, &["2"], "Abu Dhabi, United Arab Emirates"),
    area(92, &["21"], "Karachi, Pakistan"),
    area(92, &["42"], "Lahore, Pakistan"),
    area(92, &["51"], "Islamabad, Pakistan"),
    area(91, &["11"], "New Delhi, India"),
    area(91, &["22"], "Mumbai, India"),
    area(91, &["80"], "Bengaluru, India"),
    area(91, &["33"], "Kolkata, India"),
    area(91, &["44"], "Chennai, India"),
];

// ─── Mobile carrier ranges ──────────────────────────────────────

struct CarrierRange {
    country_code: u16,
    prefixes: &'static [&'static str],
    name: &'static str,
}

const fn carrier(
    country_code: u16,
    prefixes: &'static [&'static str],
    name: &'static str,
) -> CarrierRange {
    CarrierRange {
        country_code,
        prefixes,
        name,
    }
}

const CARRIER_RANGES: &[CarrierRange] = &[
    carrier(
        254,
        &[
            "70", "71", "72", "740", "741", "742", "743", "745", "746", "748", "757", "758", "759",
            "768", "769", "79", "110", "111",
        ],
        "Safaricom",
    ),
    carrier(
        254,
        &[
            "73", "750", "751", "752", "753", "754", "755", "756", "762", "78", "100", "101", "102",
        ],
        "Airtel",
    ),
    carrier(254, &["77"], "Telkom"),
    carrier(254, &["747"], "JTL"),
    carrier(
        234,
        &[
            "703", "706", "803", "806", "810", "813", "814", "816", "903", "906",
        ],
        "MTN",
    ),
    carrier(234, &["705", "805", "807", "811", "815", "905"], "Glo"),
    carrier(
        234,
        &["701", "708", "802", "808", "812", "901", "902", "907"],
        "Airtel",
    ),
    carrier(234, &["809", "817", "818", "908", "909"], "9mobile"),
    carrier(256, &["76", "77", "78"], "MTN"),
    carrier(256, &["70", "74", "75"], "Airtel"),
    carrier(255, &["74", "75", "76"], "Vodacom"),
    carrier(255, &["65", "67", "71"], "Tigo"),
    carrier(255, &["68", "69", "78"], "Airtel"),
    carrier(233, &["24", "54", "55", "59"], "MTN"),
    carrier(233, &["20", "50"], "Telecel"),
    carrier(233, &["26", "27", "56", "57"], "AirtelTigo"),
    carrier(27, &["72", "82"], "Vodacom"),
    carrier(27, &["73", "83"], "MTN"),
    carrier(27, &["74", "84"], "Cell C"),
    carrier(20, &["10"], "Vodafone"),
    carrier(20, &["11"], "Etisalat"),
    carrier(20, &["12"], "Orange"),
    carrier(20, &["15"], "WE"),
    carrier(49, &["151", "160", "170", "171", "175"], "Telekom"),
    carrier(49, &["152", "162", "172", "173", "174"], "Vodafone"),
    carrier(
        49,
        &["155", "157", "159", "163", "176", "177", "178", "179"],
        "O2",
    ),
    carrier(966, &["50", "53", "55"], "STC"),
    carrier(966, &["54", "56"], "Mobily"),
    carrier(966, &["58", "59"], "Zain"),
    carrier(971, &["50", "54", "56"], "Etisalat"),
    carrier(971, &["52", "55", "58"], "du"),
    carrier(92, &["30", "32"], "Jazz"),
    carrier(92, &["31"], "Zong"),
    carrier(92, &["33"], "Ufone"),
    carrier(92, &["34"], "Telenor"),
];

/// Longest `prefixes` entry of `digits`, paired with the row it came from.
fn longest_match<'a, T>(
    rows: impl Iterator<Item = (&'a T, &'static [&'static str])>,
    digits: &str,
) -> Option<&'a T>
where
    T: 'a,
{
    let mut best: Option<(&T, usize)> = None;
    for (row, prefixes) in rows {
        for prefix in prefixes {
            if digits.starts_with(prefix) && best.map_or(true, |(_, len)| prefix.len() > len) {
                best = Some((row, prefix.len()));
            }
        }
    }
    best.map(|(row, _)| row)
}

/// Look up the geographic area for a national number.
pub fn area_description(country_code: u16, national_digits: &str) -> Option<&'static str> {
    let rows = AREA_CODES
        .iter()
        .filter(|a| a.country_code == country_code)
        .map(|a| (a, a.prefixes));
    longest_match(rows, national_digits).map(|a| a.description)
}

/// Look up the operator originally allocated a mobile range.
pub fn carrier_for(country_code: u16, national_digits: &str) -> Option<&'static str> {
    let rows = CARRIER_RANGES
        .iter()
        .filter(|c| c.country_code == country_code)
        .map(|c| (c, c.prefixes));
    longest_match(rows, national_digits).map(|c| c.name)
}

// ─── Country names ──────────────────────────────────────────────

/// Get the English display name for an ISO 3166-1 alpha-2 code.
///
/// Covers every assigned code plus the user-assigned ones libphonenumber
/// hands out (`AC`, `TA`, `XK`).
pub fn country_name(code: &str) -> Option<&'static str> {
    let name = match code.to_uppercase().as_str() {
        "AC" => "Ascension Island",
        "AD" => "Andorra",
        "AE" => "United Arab Emirates",
        "AF" => "Afghanistan",
        "AG" => "Antigua and Barbuda",
        "AI" => "Anguilla",
        "AL" => "Albania",
        "AM" => "Armenia",
        "AO" => "Angola",
        "AQ" => "Antarctica",
        "AR" => "Argentina",
        "AS" => "American Samoa",
        "AT" => "Austria",
        "AU" => "Australia",
        "AW" => "Aruba",
        "AX" => "Åland Islands",
        "AZ" => "Azerbaijan",
        "BA" => "Bosnia and Herzegovina",
        "BB" => "Barbados",
        "BD" => "Bangladesh",
        "BE" => "Belgium",
        "BF" => "Burkina Faso",
        "BG" => "Bulgaria",
        "BH" => "Bahrain",
        "BI" => "Burundi",
        "BJ" => "Benin",
        "BL" => "Saint Barthélemy",
        "BM" => "Bermuda",
        "BN" => "Brunei",
        "BO" => "Bolivia",
        "BQ" => "Caribbean Netherlands",
        "BR" => "Brazil",
        "BS" => "Bahamas",
        "BT" => "Bhutan",
        "BV" => "Bouvet Island",
        "BW" => "Botswana",
        "BY" => "Belarus",
        "BZ" => "Belize",
        "CA" => "Canada",
        "CC" => "Cocos (Keeling) Islands",
        "CD" => "Democratic Republic of the Congo",
        "CF" => "Central African Republic",
        "CG" => "Republic of the Congo",
        "CH" => "Switzerland",
        "CI" => "Côte d'Ivoire",
        "CK" => "Cook Islands",
        "CL" => "Chile",
        "CM" => "Cameroon",
        "CN" => "China",
        "CO" => "Colombia",
        "CR" => "Costa Rica",
        "CU" => "Cuba",
        "CV" => "Cape Verde",
        "CW" => "Curaçao",
        "CX" => "Christmas Island",
        "CY" => "Cyprus",
        "CZ" => "Czechia",
        "DE" => "Germany",
        "DJ" => "Djibouti",
        "DK" => "Denmark",
        "DM" => "Dominica",
        "DO" => "Dominican Republic",
        "DZ" => "Algeria",
        "EC" => "Ecuador",
        "EE" => "Estonia",
        "EG" => "Egypt",
        "EH" => "Western Sahara",
        "ER" => "Eritrea",
        "ES" => "Spain",
        "ET" => "Ethiopia",
        "FI" => "Finland",
        "FJ" => "Fiji",
        "FK" => "Falkland Islands",
        "FM" => "Micronesia",
        "FO" => "Faroe Islands",
        "FR" => "France",
        "GA" => "Gabon",
        "GB" => "United Kingdom",
        "GD" => "Grenada",
        "GE" => "Georgia",
        "GF" => "French Guiana",
        "GG" => "Guernsey",
        "GH" => "Ghana",
        "GI" => "Gibraltar",
        "GL" => "Greenland",
        "GM" => "Gambia",
        "GN" => "Guinea",
        "GP" => "Guadeloupe",
        "GQ" => "Equatorial Guinea",
        "GR" => "Greece",
        "GS" => "South Georgia and the South Sandwich Islands",
        "GT" => "Guatemala",
        "GU" => "Guam",
        "GW" => "Guinea-Bissau",
        "GY" => "Guyana",
        "HK" => "Hong Kong",
        "HM" => "Heard Island and McDonald Islands",
        "HN" => "Honduras",
        "HR" => "Croatia",
        "HT" => "Haiti",
        "HU" => "Hungary",
        "ID" => "Indonesia",
        "IE" => "Ireland",
        "IL" => "Israel",
        "IM" => "Isle of Man",
        "IN" => "India",
        "IO" => "British Indian Ocean Territory",
        "IQ" => "Iraq",
        "IR" => "Iran",
        "IS" => "Iceland",
        "IT" => "Italy",
        "JE" => "Jersey",
        "JM" => "Jamaica",
        "JO" => "Jordan",
        "JP" => "Japan",
        "KE" => "Kenya",
        "KG" => "Kyrgyzstan",
        "KH" => "Cambodia",
        "KI" => "Kiribati",
        "KM" => "Comoros",
        "KN" => "Saint Kitts and Nevis",
        "KP" => "North Korea",
        "KR" => "South Korea",
        "KW" => "Kuwait",
        "KY" => "Cayman Islands",
        "KZ" => "Kazakhstan",
        "LA" => "Laos",
        "LB" => "Lebanon",
        "LC" => "Saint Lucia",
        "LI" => "Liechtenstein",
        "LK" => "Sri Lanka",
        "LR" => "Liberia",
        "LS" => "Lesotho",
        "LT" => "Lithuania",
        "LU" => "Luxembourg",
        "LV" => "Latvia",
        "LY" => "Libya",
        "MA" => "Morocco",
        "MC" => "Monaco",
        "MD" => "Moldova",
        "ME" => "Montenegro",
        "MF" => "Saint Martin",
        "MG" => "Madagascar",
        "MH" => "Marshall Islands",
        "MK" => "North Macedonia",
        "ML" => "Mali",
        "MM" => "Myanmar",
        "MN" => "Mongolia",
        "MO" => "Macao",
        "MP" => "Northern Mariana Islands",
        "MQ" => "Martinique",
        "MR" => "Mauritania",
        "MS" => "Montserrat",
        "MT" => "Malta",
        "MU" => "Mauritius",
        "MV" => "Maldives",
        "MW" => "Malawi",
        "MX" => "Mexico",
        "MY" => "Malaysia",
        "MZ" => "Mozambique",
        "NA" => "Namibia",
        "NC" => "New Caledonia",
        "NE" => "Niger",
        "NF" => "Norfolk Island",
        "NG" => "Nigeria",
        "NI" => "Nicaragua",
        "NL" => "Netherlands",
        "NO" => "Norway",
        "NP" => "Nepal",
        "NR" => "Nauru",
        "NU" => "Niue",
        "NZ" => "New Zealand",
        "OM" => "Oman",
        "PA" => "Panama",
        "PE" => "Peru",
        "PF" => "French Polynesia",
        "PG" => "Papua New Guinea",
        "PH" => "Philippines",
        "PK" => "Pakistan",
        "PL" => "Poland",
        "PM" => "Saint Pierre and Miquelon",
        "PN" => "Pitcairn Islands",
        "PR" => "Puerto Rico",
        "PS" => "Palestine",
        "PT" => "Portugal",
        "PW" => "Palau",
        "PY" => "Paraguay",
        "QA" => "Qatar",
        "RE" => "Réunion",
        "RO" => "Romania",
        "RS" => "Serbia",
        "RU" => "Russia",
        "RW" => "Rwanda",
        "SA" => "Saudi Arabia",
        "SB" => "Solomon Islands",
        "SC" => "Seychelles",
        "SD" => "Sudan",
        "SE" => "Sweden",
        "SG" => "Singapore",
        "SH" => "Saint Helena",
        "SI" => "Slovenia",
        "SJ" => "Svalbard and Jan Mayen",
        "SK" => "Slovakia",
        "SL" => "Sierra Leone",
        "SM" => "San Marino",
        "SN" => "Senegal",
        "SO" => "Somalia",
        "SR" => "Suriname",
        "SS" => "South Sudan",
        "ST" => "São Tomé and Príncipe",
        "SV" => "El Salvador",
        "SX" => "Sint Maarten",
        "SY" => "Syria",
        "SZ" => "Eswatini",
        "TA" => "Tristan da Cunha",
        "TC" => "Turks and Caicos Islands",
        "TD" => "Chad",
        "TF" => "French Southern Territories",
        "TG" => "Togo",
        "TH" => "Thailand",
        "TJ" => "Tajikistan",
        "TK" => "Tokelau",
        "TL" => "Timor-Leste",
        "TM" => "Turkmenistan",
        "TN" => "Tunisia",
        "TO" => "Tonga",
        "TR" => "Turkey",
        "TT" => "Trinidad and Tobago",
        "TV" => "Tuvalu",
        "TW" => "Taiwan",
        "TZ" => "Tanzania",
        "UA" => "Ukraine",
        "UG" => "Uganda",
        "UM" => "United States Minor Outlying Islands",
        "US" => "United States",
        "UY" => "Uruguay",
        "UZ" => "Uzbekistan",
        "VA" => "Vatican City",
        "VC" => "Saint Vincent and the Grenadines",
        "VE" => "Venezuela",
        "VG" => "British Virgin Islands",
        "VI" => "U.S. Virgin Islands",
        "VN" => "Vietnam",
        "VU" => "Vanuatu",
        "WF" => "Wallis and Futuna",
        "WS" => "Samoa",
        "XK" => "Kosovo",
        "YE" => "Yemen",
        "YT" => "Mayotte",
        "ZA" => "South Africa",
        "ZM" => "Zambia",
        "ZW" => "Zimbabwe",
        _ => return None,
    };
    Some(name)
}

// ─── Calling codes ──────────────────────────────────────────────

/// Region that owns a country calling code. Shared codes (`1`, `7`, `44`,
/// ...) name the main country of the plan.
pub fn primary_region(calling_code: u16) -> Option<&'static str> {
    let region = match calling_code {
        1 => "US",
        7 => "RU",
        20 => "EG",
        27 => "ZA",
        30 => "GR",
        31 => "NL",
        32 => "BE",
        33 => "FR",
        34 => "ES",
        36 => "HU",
        39 => "IT",
        40 => "RO",
        41 => "CH",
        43 => "AT",
        44 => "GB",
        45 => "DK",
        46 => "SE",
        47 => "NO",
        48 => "PL",
        49 => "DE",
        51 => "PE",
        52 => "MX",
        53 => "CU",
        54 => "AR",
        55 => "BR",
        56 => "CL",
        57 => "CO",
        58 => "VE",
        60 => "MY",
        61 => "AU",
        62 => "ID",
        63 => "PH",
        64 => "NZ",
        65 => "SG",
        66 => "TH",
        81 => "JP",
        82 => "KR",
        84 => "VN",
        86 => "CN",
        90 => "TR",
        91 => "IN",
        92 => "PK",
        93 => "AF",
        94 => "LK",
        95 => "MM",
        98 => "IR",
        211 => "SS",
        212 => "MA",
        213 => "DZ",
        216 => "TN",
        218 => "LY",
        220 => "GM",
        221 => "SN",
        222 => "MR",
        223 => "ML",
        224 => "GN",
        225 => "CI",
        226 => "BF",
        227 => "NE",
        228 => "TG",
        229 => "BJ",
        230 => "MU",
        231 => "LR",
        232 => "SL",
        233 => "GH",
        234 => "NG",
        235 => "TD",
        236 => "CF",
        237 => "CM",
        238 => "CV",
        239 => "ST",
        240 => "GQ",
        241 => "GA",
        242 => "CG",
        243 => "CD",
        244 => "AO",
        245 => "GW",
        246 => "IO",
        247 => "AC",
        248 => "SC",
        249 => "SD",
        250 => "RW",
        251 => "ET",
        252 => "SO",
        253 => "DJ",
        254 => "KE",
        255 => "TZ",
        256 => "UG",
        257 => "BI",
        258 => "MZ",
        260 => "ZM",
        261 => "MG",
        262 => "RE",
        263 => "ZW",
        264 => "NA",
        265 => "MW",
        266 => "LS",
        267 => "BW",
        268 => "SZ",
        269 => "KM",
        290 => "SH",
        291 => "ER",
        297 => "AW",
        298 => "FO",
        299 => "GL",
        350 => "GI",
        351 => "PT",
        352 => "LU",
        353 => "IE",
        354 => "IS",
        355 => "AL",
        356 => "MT",
        357 => "CY",
        358 => "FI",
        359 => "BG",
        370 => "LT",
        371 => "LV",
        372 => "EE",
        373 => "MD",
        374 => "AM",
        375 => "BY",
        376 => "AD",
        377 => "MC",
        378 => "SM",
        380 => "UA",
        381 => "RS",
        382 => "ME",
        383 => "XK",
        385 => "HR",
        386 => "SI",
        387 => "BA",
        389 => "MK",
        420 => "CZ",
        421 => "SK",
        423 => "LI",
        500 => "FK",
        501 => "BZ",
        502 => "GT",
        503 => "SV",
        504 => "HN",
        505 => "NI",
        506 => "CR",
        507 => "PA",
        508 => "PM",
        509 => "HT",
        590 => "GP",
        591 => "BO",
        592 => "GY",
        593 => "EC",
        594 => "GF",
        595 => "PY",
        596 => "MQ",
        597 => "SR",
        598 => "UY",
        599 => "CW",
        670 => "TL",
        672 => "NF",
        673 => "BN",
        674 => "NR",
        675 => "PG",
        676 => "TO",
        677 => "SB",
        678 => "VU",
        679 => "FJ",
        680 => "PW",
        681 => "WF",
        682 => "CK",
        683 => "NU",
        685 => "WS",
        686 => "KI",
        687 => "NC",
        688 => "TV",
        689 => "PF",
        690 => "TK",
        691 => "FM",
        692 => "MH",
        850 => "KP",
        852 => "HK",
        853 => "MO",
        855 => "KH",
        856 => "LA",
        880 => "BD",
        886 => "TW",
        960 => "MV",
        961 => "LB",
        962 => "JO",
        963 => "SY",
        964 => "IQ",
        965 => "KW",
        966 => "SA",
        967 => "YE",
        968 => "OM",
        970 => "PS",
        971 => "AE",
        972 => "IL",
        973 => "BH",
        974 => "QA",
        975 => "BT",
        976 => "MN",
        977 => "NP",
        992 => "TJ",
        993 => "TM",
        994 => "AZ",
        995 => "GE",
        996 => "KG",
        998 => "UZ",
        _ => return None,
    };
    Some(region)
}

/// Country name for a calling code, via its primary region.
pub fn calling_code_country(calling_code: u16) -> Option<&'static str> {
    primary_region(calling_code).and_then(country_name)
}

/// Territories numbered inside their parent's plan. Their non-geographic
/// ranges are reported under the parent country.
pub fn is_dependency(calling_code: u16, region: &str) -> bool {
    matches!(
        (calling_code, region),
        (44, "GG" | "JE" | "IM")
            | (47, "SJ")
            | (61, "CX" | "CC")
            | (39, "VA")
            | (262, "YT")
            | (290, "TA")
            | (358, "AX")
            | (590, "BL" | "MF")
    )
}
