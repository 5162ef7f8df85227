//! Built-in knowledge for early diagnosis of infectious diseases in toddlers
//! (Afdal & Humani, 2020): 41 symptoms, 7 conditions, 7 handling notes.

pub(super) fn symptoms() -> Vec<(&'static str, &'static str)> {
    vec![
        ("G01", "Suhu badan di atas 38°C"),
        ("G02", "Mata merah dan berair"),
        ("G03", "Batuk"),
        ("G04", "Pilek"),
        ("G05", "Bercak putih di dalam mulut"),
        ("G06", "Kelainan kemerahan di kulit"),
        ("G07", "Ruam coklat kemerahan seluruh tubuh"),
        ("G08", "Ruam memudar hari ke-5 atau ke-6"),
        ("G09", "Demam ringan (bawah 38°C)"),
        ("G10", "Sakit kepala"),
        ("G11", "Kelenjar getah bening bengkak di leher"),
        ("G12", "Ruam merah muda 24-48 jam menyeluruh"),
        ("G13", "Bintik merah kecil"),
        ("G14", "Ruam memudar hari ke-3"),
        ("G15", "Mual"),
        ("G16", "Ruam di kulit"),
        ("G17", "Bekas cacar air membentuk cekungan"),
        ("G18", "Ruam terasa gatal"),
        ("G19", "Gangguan pernapasan"),
        ("G20", "Pipi anak berwarna merah"),
        ("G21", "Sakit tenggorokan"),
        ("G22", "Ruam menyebar ke tubuh/lengan/kaki"),
        ("G23", "Demam turun drastis"),
        ("G24", "Ruam berwarna merah tua"),
        ("G25", "Radang tenggorokan"),
        ("G26", "Tidak nafsu makan"),
        ("G27", "Diare ringan"),
        ("G28", "Kejang"),
        ("G29", "Infeksi sekitar hidung dan mulut"),
        ("G30", "Bintik kuning seperti madu"),
        ("G31", "Bintik pecah dan memerah"),
        ("G32", "Bintik bernanah dan berkerak"),
        ("G33", "Demam tinggi mendadak 2–7 hari"),
        ("G34", "Pendarahan kulit"),
        ("G35", "Pendarahan gusi"),
        ("G36", "Mimisan atau BAB berdarah"),
        ("G37", "Nyeri perut"),
        ("G38", "Ruam muncul setelah demam"),
        ("G39", "Muntah"),
        ("G40", "Kesadaran menurun"),
        ("G41", "Fase syok, gelisah, lesu"),
    ]
}

pub(super) fn conditions() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Campak (P01)",
            vec!["G01", "G02", "G03", "G04", "G05", "G06", "G07", "G08"],
        ),
        (
            "Rubella (P02)",
            vec!["G02", "G03", "G06", "G09", "G10", "G11", "G12", "G13", "G14"],
        ),
        (
            "Cacar Air (P03)",
            vec!["G09", "G10", "G15", "G16", "G17", "G18"],
        ),
        (
            "Sindrom Pipi Merah (P04)",
            vec!["G03", "G04", "G09", "G19", "G20", "G21", "G22"],
        ),
        (
            "Roseola Infantum (P05)",
            vec![
                "G01", "G03", "G04", "G06", "G23", "G24", "G25", "G26", "G27", "G28",
            ],
        ),
        ("Impetigo (P06)", vec!["G29", "G30", "G31", "G32"]),
        (
            "Demam Berdarah (P07)",
            vec![
                "G01", "G03", "G15", "G33", "G34", "G35", "G36", "G37", "G38", "G39", "G40",
                "G41",
            ],
        ),
    ]
}

pub(super) fn recommendations() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Campak (P01)",
            "Periksa ke dokter anak, isolasi, dan hidrasi cukup.",
        ),
        ("Rubella (P02)", "Pantau ruam & demam, jaga kebersihan."),
        (
            "Cacar Air (P03)",
            "Hindari menggaruk, jaga kebersihan kulit.",
        ),
        (
            "Sindrom Pipi Merah (P04)",
            "Istirahat dan hindari kontak dekat dengan anak lain.",
        ),
        (
            "Roseola Infantum (P05)",
            "Pantau suhu & kejang, segera ke dokter bila berat.",
        ),
        (
            "Impetigo (P06)",
            "Gunakan salep antibiotik sesuai resep dokter.",
        ),
        (
            "Demam Berdarah (P07)",
            "Segera ke rumah sakit, pantau cairan & perdarahan.",
        ),
    ]
}
