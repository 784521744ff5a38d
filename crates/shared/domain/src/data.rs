//! Static ISO 3166-1 dataset.
//!
//! Entries are in ISO short-name order. `ioc` is the International Olympic
//! Committee code, absent for territories without a national committee.

/// One row of the ISO 3166-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub alpha3: &'static str,
    pub numeric: u16,
    pub ioc: Option<&'static str>,
}

const fn record(
    code: &'static str,
    name: &'static str,
    alpha3: &'static str,
    numeric: u16,
    ioc: Option<&'static str>,
) -> CountryRecord {
    CountryRecord { code, name, alpha3, numeric, ioc }
}

/// All officially assigned ISO 3166-1 alpha-2 codes.
pub static COUNTRIES: &[CountryRecord] = &[
    record("AF", "Afghanistan", "AFG", 4, Some("AFG")),
    record("AX", "Åland Islands", "ALA", 248, None),
    record("AL", "Albania", "ALB", 8, Some("ALB")),
    record("DZ", "Algeria", "DZA", 12, Some("ALG")),
    record("AS", "American Samoa", "ASM", 16, Some("ASA")),
    record("AD", "Andorra", "AND", 20, Some("AND")),
    record("AO", "Angola", "AGO", 24, Some("ANG")),
    record("AI", "Anguilla", "AIA", 660, None),
    record("AQ", "Antarctica", "ATA", 10, None),
    record("AG", "Antigua and Barbuda", "ATG", 28, Some("ANT")),
    record("AR", "Argentina", "ARG", 32, Some("ARG")),
    record("AM", "Armenia", "ARM", 51, Some("ARM")),
    record("AW", "Aruba", "ABW", 533, Some("ARU")),
    record("AU", "Australia", "AUS", 36, Some("AUS")),
    record("AT", "Austria", "AUT", 40, Some("AUT")),
    record("AZ", "Azerbaijan", "AZE", 31, Some("AZE")),
    record("BS", "Bahamas", "BHS", 44, Some("BAH")),
    record("BH", "Bahrain", "BHR", 48, Some("BRN")),
    record("BD", "Bangladesh", "BGD", 50, Some("BAN")),
    record("BB", "Barbados", "BRB", 52, Some("BAR")),
    record("BY", "Belarus", "BLR", 112, Some("BLR")),
    record("BE", "Belgium", "BEL", 56, Some("BEL")),
    record("BZ", "Belize", "BLZ", 84, Some("BIZ")),
    record("BJ", "Benin", "BEN", 204, Some("BEN")),
    record("BM", "Bermuda", "BMU", 60, Some("BER")),
    record("BT", "Bhutan", "BTN", 64, Some("BHU")),
    record("BO", "Bolivia (Plurinational State of)", "BOL", 68, Some("BOL")),
    record("BQ", "Bonaire, Sint Eustatius and Saba", "BES", 535, None),
    record("BA", "Bosnia and Herzegovina", "BIH", 70, Some("BIH")),
    record("BW", "Botswana", "BWA", 72, Some("BOT")),
    record("BV", "Bouvet Island", "BVT", 74, None),
    record("BR", "Brazil", "BRA", 76, Some("BRA")),
    record("IO", "British Indian Ocean Territory", "IOT", 86, None),
    record("BN", "Brunei Darussalam", "BRN", 96, Some("BRU")),
    record("BG", "Bulgaria", "BGR", 100, Some("BUL")),
    record("BF", "Burkina Faso", "BFA", 854, Some("BUR")),
    record("BI", "Burundi", "BDI", 108, Some("BDI")),
    record("CV", "Cabo Verde", "CPV", 132, Some("CPV")),
    record("KH", "Cambodia", "KHM", 116, Some("CAM")),
    record("CM", "Cameroon", "CMR", 120, Some("CMR")),
    record("CA", "Canada", "CAN", 124, Some("CAN")),
    record("KY", "Cayman Islands", "CYM", 136, Some("CAY")),
    record("CF", "Central African Republic", "CAF", 140, Some("CAF")),
    record("TD", "Chad", "TCD", 148, Some("CHA")),
    record("CL", "Chile", "CHL", 152, Some("CHI")),
    record("CN", "China", "CHN", 156, Some("CHN")),
    record("CX", "Christmas Island", "CXR", 162, None),
    record("CC", "Cocos (Keeling) Islands", "CCK", 166, None),
    record("CO", "Colombia", "COL", 170, Some("COL")),
    record("KM", "Comoros", "COM", 174, Some("COM")),
    record("CG", "Congo", "COG", 178, Some("CGO")),
    record("CD", "Congo (the Democratic Republic of the)", "COD", 180, Some("COD")),
    record("CK", "Cook Islands", "COK", 184, Some("COK")),
    record("CR", "Costa Rica", "CRI", 188, Some("CRC")),
    record("CI", "Côte d'Ivoire", "CIV", 384, Some("CIV")),
    record("HR", "Croatia", "HRV", 191, Some("CRO")),
    record("CU", "Cuba", "CUB", 192, Some("CUB")),
    record("CW", "Curaçao", "CUW", 531, None),
    record("CY", "Cyprus", "CYP", 196, Some("CYP")),
    record("CZ", "Czechia", "CZE", 203, Some("CZE")),
    record("DK", "Denmark", "DNK", 208, Some("DEN")),
    record("DJ", "Djibouti", "DJI", 262, Some("DJI")),
    record("DM", "Dominica", "DMA", 212, Some("DMA")),
    record("DO", "Dominican Republic", "DOM", 214, Some("DOM")),
    record("EC", "Ecuador", "ECU", 218, Some("ECU")),
    record("EG", "Egypt", "EGY", 818, Some("EGY")),
    record("SV", "El Salvador", "SLV", 222, Some("ESA")),
    record("GQ", "Equatorial Guinea", "GNQ", 226, Some("GEQ")),
    record("ER", "Eritrea", "ERI", 232, Some("ERI")),
    record("EE", "Estonia", "EST", 233, Some("EST")),
    record("SZ", "Eswatini", "SWZ", 748, Some("SWZ")),
    record("ET", "Ethiopia", "ETH", 231, Some("ETH")),
    record("FK", "Falkland Islands (Malvinas)", "FLK", 238, None),
    record("FO", "Faroe Islands", "FRO", 234, None),
    record("FJ", "Fiji", "FJI", 242, Some("FIJ")),
    record("FI", "Finland", "FIN", 246, Some("FIN")),
    record("FR", "France", "FRA", 250, Some("FRA")),
    record("GF", "French Guiana", "GUF", 254, None),
    record("PF", "French Polynesia", "PYF", 258, None),
    record("TF", "French Southern Territories", "ATF", 260, None),
    record("GA", "Gabon", "GAB", 266, Some("GAB")),
    record("GM", "Gambia", "GMB", 270, Some("GAM")),
    record("GE", "Georgia", "GEO", 268, Some("GEO")),
    record("DE", "Germany", "DEU", 276, Some("GER")),
    record("GH", "Ghana", "GHA", 288, Some("GHA")),
    record("GI", "Gibraltar", "GIB", 292, None),
    record("GR", "Greece", "GRC", 300, Some("GRE")),
    record("GL", "Greenland", "GRL", 304, None),
    record("GD", "Grenada", "GRD", 308, Some("GRN")),
    record("GP", "Guadeloupe", "GLP", 312, None),
    record("GU", "Guam", "GUM", 316, Some("GUM")),
    record("GT", "Guatemala", "GTM", 320, Some("GUA")),
    record("GG", "Guernsey", "GGY", 831, None),
    record("GN", "Guinea", "GIN", 324, Some("GUI")),
    record("GW", "Guinea-Bissau", "GNB", 624, Some("GBS")),
    record("GY", "Guyana", "GUY", 328, Some("GUY")),
    record("HT", "Haiti", "HTI", 332, Some("HAI")),
    record("HM", "Heard Island and McDonald Islands", "HMD", 334, None),
    record("VA", "Holy See", "VAT", 336, None),
    record("HN", "Honduras", "HND", 340, Some("HON")),
    record("HK", "Hong Kong", "HKG", 344, Some("HKG")),
    record("HU", "Hungary", "HUN", 348, Some("HUN")),
    record("IS", "Iceland", "ISL", 352, Some("ISL")),
    record("IN", "India", "IND", 356, Some("IND")),
    record("ID", "Indonesia", "IDN", 360, Some("INA")),
    record("IR", "Iran (Islamic Republic of)", "IRN", 364, Some("IRI")),
    record("IQ", "Iraq", "IRQ", 368, Some("IRQ")),
    record("IE", "Ireland", "IRL", 372, Some("IRL")),
    record("IM", "Isle of Man", "IMN", 833, None),
    record("IL", "Israel", "ISR", 376, Some("ISR")),
    record("IT", "Italy", "ITA", 380, Some("ITA")),
    record("JM", "Jamaica", "JAM", 388, Some("JAM")),
    record("JP", "Japan", "JPN", 392, Some("JPN")),
    record("JE", "Jersey", "JEY", 832, None),
    record("JO", "Jordan", "JOR", 400, Some("JOR")),
    record("KZ", "Kazakhstan", "KAZ", 398, Some("KAZ")),
    record("KE", "Kenya", "KEN", 404, Some("KEN")),
    record("KI", "Kiribati", "KIR", 296, Some("KIR")),
    record("KP", "Korea (the Democratic People's Republic of)", "PRK", 408, Some("PRK")),
    record("KR", "Korea (the Republic of)", "KOR", 410, Some("KOR")),
    record("KW", "Kuwait", "KWT", 414, Some("KUW")),
    record("KG", "Kyrgyzstan", "KGZ", 417, Some("KGZ")),
    record("LA", "Lao People's Democratic Republic", "LAO", 418, Some("LAO")),
    record("LV", "Latvia", "LVA", 428, Some("LAT")),
    record("LB", "Lebanon", "LBN", 422, Some("LIB")),
    record("LS", "Lesotho", "LSO", 426, Some("LES")),
    record("LR", "Liberia", "LBR", 430, Some("LBR")),
    record("LY", "Libya", "LBY", 434, Some("LBA")),
    record("LI", "Liechtenstein", "LIE", 438, Some("LIE")),
    record("LT", "Lithuania", "LTU", 440, Some("LTU")),
    record("LU", "Luxembourg", "LUX", 442, Some("LUX")),
    record("MO", "Macao", "MAC", 446, None),
    record("MG", "Madagascar", "MDG", 450, Some("MAD")),
    record("MW", "Malawi", "MWI", 454, Some("MAW")),
    record("MY", "Malaysia", "MYS", 458, Some("MAS")),
    record("MV", "Maldives", "MDV", 462, Some("MDV")),
    record("ML", "Mali", "MLI", 466, Some("MLI")),
    record("MT", "Malta", "MLT", 470, Some("MLT")),
    record("MH", "Marshall Islands", "MHL", 584, Some("MHL")),
    record("MQ", "Martinique", "MTQ", 474, None),
    record("MR", "Mauritania", "MRT", 478, Some("MTN")),
    record("MU", "Mauritius", "MUS", 480, Some("MRI")),
    record("YT", "Mayotte", "MYT", 175, None),
    record("MX", "Mexico", "MEX", 484, Some("MEX")),
    record("FM", "Micronesia (Federated States of)", "FSM", 583, Some("FSM")),
    record("MD", "Moldova (the Republic of)", "MDA", 498, Some("MDA")),
    record("MC", "Monaco", "MCO", 492, Some("MON")),
    record("MN", "Mongolia", "MNG", 496, Some("MGL")),
    record("ME", "Montenegro", "MNE", 499, Some("MNE")),
    record("MS", "Montserrat", "MSR", 500, None),
    record("MA", "Morocco", "MAR", 504, Some("MAR")),
    record("MZ", "Mozambique", "MOZ", 508, Some("MOZ")),
    record("MM", "Myanmar", "MMR", 104, Some("MYA")),
    record("NA", "Namibia", "NAM", 516, Some("NAM")),
    record("NR", "Nauru", "NRU", 520, Some("NRU")),
    record("NP", "Nepal", "NPL", 524, Some("NEP")),
    record("NL", "Netherlands", "NLD", 528, Some("NED")),
    record("NC", "New Caledonia", "NCL", 540, None),
    record("NZ", "New Zealand", "NZL", 554, Some("NZL")),
    record("NI", "Nicaragua", "NIC", 558, Some("NCA")),
    record("NE", "Niger", "NER", 562, Some("NIG")),
    record("NG", "Nigeria", "NGA", 566, Some("NGR")),
    record("NU", "Niue", "NIU", 570, None),
    record("NF", "Norfolk Island", "NFK", 574, None),
    record("MK", "North Macedonia", "MKD", 807, Some("MKD")),
    record("MP", "Northern Mariana Islands", "MNP", 580, None),
    record("NO", "Norway", "NOR", 578, Some("NOR")),
    record("OM", "Oman", "OMN", 512, Some("OMA")),
    record("PK", "Pakistan", "PAK", 586, Some("PAK")),
    record("PW", "Palau", "PLW", 585, Some("PLW")),
    record("PS", "Palestine, State of", "PSE", 275, Some("PLE")),
    record("PA", "Panama", "PAN", 591, Some("PAN")),
    record("PG", "Papua New Guinea", "PNG", 598, Some("PNG")),
    record("PY", "Paraguay", "PRY", 600, Some("PAR")),
    record("PE", "Peru", "PER", 604, Some("PER")),
    record("PH", "Philippines", "PHL", 608, Some("PHI")),
    record("PN", "Pitcairn", "PCN", 612, None),
    record("PL", "Poland", "POL", 616, Some("POL")),
    record("PT", "Portugal", "PRT", 620, Some("POR")),
    record("PR", "Puerto Rico", "PRI", 630, Some("PUR")),
    record("QA", "Qatar", "QAT", 634, Some("QAT")),
    record("RE", "Réunion", "REU", 638, None),
    record("RO", "Romania", "ROU", 642, Some("ROU")),
    record("RU", "Russian Federation", "RUS", 643, Some("RUS")),
    record("RW", "Rwanda", "RWA", 646, Some("RWA")),
    record("BL", "Saint Barthélemy", "BLM", 652, None),
    record("SH", "Saint Helena, Ascension and Tristan da Cunha", "SHN", 654, None),
    record("KN", "Saint Kitts and Nevis", "KNA", 659, Some("SKN")),
    record("LC", "Saint Lucia", "LCA", 662, Some("LCA")),
    record("MF", "Saint Martin (French part)", "MAF", 663, None),
    record("PM", "Saint Pierre and Miquelon", "SPM", 666, None),
    record("VC", "Saint Vincent and the Grenadines", "VCT", 670, Some("VIN")),
    record("WS", "Samoa", "WSM", 882, Some("SAM")),
    record("SM", "San Marino", "SMR", 674, Some("SMR")),
    record("ST", "Sao Tome and Principe", "STP", 678, Some("STP")),
    record("SA", "Saudi Arabia", "SAU", 682, Some("KSA")),
    record("SN", "Senegal", "SEN", 686, Some("SEN")),
    record("RS", "Serbia", "SRB", 688, Some("SRB")),
    record("SC", "Seychelles", "SYC", 690, Some("SEY")),
    record("SL", "Sierra Leone", "SLE", 694, Some("SLE")),
    record("SG", "Singapore", "SGP", 702, Some("SGP")),
    record("SX", "Sint Maarten (Dutch part)", "SXM", 534, None),
    record("SK", "Slovakia", "SVK", 703, Some("SVK")),
    record("SI", "Slovenia", "SVN", 705, Some("SLO")),
    record("SB", "Solomon Islands", "SLB", 90, Some("SOL")),
    record("SO", "Somalia", "SOM", 706, Some("SOM")),
    record("ZA", "South Africa", "ZAF", 710, Some("RSA")),
    record("GS", "South Georgia and the South Sandwich Islands", "SGS", 239, None),
    record("SS", "South Sudan", "SSD", 728, Some("SSD")),
    record("ES", "Spain", "ESP", 724, Some("ESP")),
    record("LK", "Sri Lanka", "LKA", 144, Some("SRI")),
    record("SD", "Sudan", "SDN", 729, Some("SUD")),
    record("SR", "Suriname", "SUR", 740, Some("SUR")),
    record("SJ", "Svalbard and Jan Mayen", "SJM", 744, None),
    record("SE", "Sweden", "SWE", 752, Some("SWE")),
    record("CH", "Switzerland", "CHE", 756, Some("SUI")),
    record("SY", "Syrian Arab Republic", "SYR", 760, Some("SYR")),
    record("TW", "Taiwan (Province of China)", "TWN", 158, Some("TPE")),
    record("TJ", "Tajikistan", "TJK", 762, Some("TJK")),
    record("TZ", "Tanzania, the United Republic of", "TZA", 834, Some("TAN")),
    record("TH", "Thailand", "THA", 764, Some("THA")),
    record("TL", "Timor-Leste", "TLS", 626, Some("TLS")),
    record("TG", "Togo", "TGO", 768, Some("TOG")),
    record("TK", "Tokelau", "TKL", 772, None),
    record("TO", "Tonga", "TON", 776, Some("TGA")),
    record("TT", "Trinidad and Tobago", "TTO", 780, Some("TTO")),
    record("TN", "Tunisia", "TUN", 788, Some("TUN")),
    record("TR", "Türkiye", "TUR", 792, Some("TUR")),
    record("TM", "Turkmenistan", "TKM", 795, Some("TKM")),
    record("TC", "Turks and Caicos Islands", "TCA", 796, None),
    record("TV", "Tuvalu", "TUV", 798, Some("TUV")),
    record("UG", "Uganda", "UGA", 800, Some("UGA")),
    record("UA", "Ukraine", "UKR", 804, Some("UKR")),
    record("AE", "United Arab Emirates", "ARE", 784, Some("UAE")),
    record("GB", "United Kingdom of Great Britain and Northern Ireland", "GBR", 826, Some("GBR")),
    record("UM", "United States Minor Outlying Islands", "UMI", 581, None),
    record("US", "United States of America", "USA", 840, Some("USA")),
    record("UY", "Uruguay", "URY", 858, Some("URU")),
    record("UZ", "Uzbekistan", "UZB", 860, Some("UZB")),
    record("VU", "Vanuatu", "VUT", 548, Some("VAN")),
    record("VE", "Venezuela (Bolivarian Republic of)", "VEN", 862, Some("VEN")),
    record("VN", "Viet Nam", "VNM", 704, Some("VIE")),
    record("VG", "Virgin Islands (British)", "VGB", 92, Some("IVB")),
    record("VI", "Virgin Islands (U.S.)", "VIR", 850, Some("ISV")),
    record("WF", "Wallis and Futuna", "WLF", 876, None),
    record("EH", "Western Sahara", "ESH", 732, None),
    record("YE", "Yemen", "YEM", 887, Some("YEM")),
    record("ZM", "Zambia", "ZMB", 894, Some("ZAM")),
    record("ZW", "Zimbabwe", "ZWE", 716, Some("ZIM")),
];

/// Shorter everyday names used instead of the ISO official ones when
/// `common_names` is enabled.
pub static COMMON_NAMES: &[(&str, &str)] = &[
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("GB", "United Kingdom"),
    ("IR", "Iran"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("LA", "Laos"),
    ("MD", "Moldova"),
    ("RU", "Russia"),
    ("SY", "Syria"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("VE", "Venezuela"),
    ("VN", "Vietnam"),
];

