/// Particles that attach to a word after a hyphen, tried in this order.
pub const PARTICLES_AFTER_HYPHEN: [&str; 8] = [
    "-то", "-ка", "-таки", "-де", "-тко", "-тка", "-с", "-ста",
];

/// Word-formation prefixes, longest first (in bytes), then in byte order.
pub const KNOWN_PREFIXES: [&str; 144] = [
    "противо-", "антропо", "впереди", "противо", "электро", "псевдо-", "эконом-", "экстра-",
    "взаимо", "внутри", "вперед", "гетеро", "крипто", "мульти", "псевдо", "ультра", "экстра",
    "энерго", "квази-", "контр-", "космо-", "макси-", "медиа-", "пресс-", "ретро-", "сверх-",
    "супер-", "транс-", "унтер-", "астро", "аудио", "видео", "гекто", "гелио", "гигро", "гипер",
    "интер", "инфра", "квази", "контр", "космо", "макро", "макси", "медиа", "метео", "метро",
    "микро", "милли", "много", "нарко", "небез", "нейро", "низко", "около", "палео", "пента",
    "порно", "после", "прото", "радио", "разно", "ретро", "санти", "сверх", "супер", "супра",
    "тетра", "транс", "анти-", "вице-", "лейб-", "мета-", "мини-", "обер-", "пост-", "штаб-",
    "авиа", "авто", "аква", "анти", "архи", "аэро", "вело", "гига", "гипо", "гомо", "двух",
    "дека", "деци", "евро", "кило", "кино", "мало", "мега", "мета", "мини", "моно", "мото",
    "нано", "недо", "обще", "одно", "орто", "пара", "пере", "пиро", "поли", "полу", "пост",
    "пред", "само", "спец", "теле", "экзо", "эндо", "этно", "арт-", "лже-", "пра-", "топ-",
    "экс-", "арт", "без", "бес", "био", "вне", "гео", "дву", "дез", "дис", "зоо", "лже", "меж",
    "нео", "пан", "пра", "суб", "эко", "экс", "де", "до", "за", "не", "ре",
];

/// Splits `word` after each of its first `max_prefix_len` characters,
/// keeping at least `min_remainder` characters on the right. Shortest
/// prefix first.
pub fn word_splits(word: &str, min_remainder: usize, max_prefix_len: usize) -> Vec<(&str, &str)> {
    let len = word.chars().count();
    let n = max_prefix_len.min(len.saturating_sub(min_remainder));

    word.char_indices()
        .skip(1)
        .take(n)
        .map(|(i, _)| word.split_at(i))
        .collect()
}

/// Splits off up to `max_len` trailing characters, longest ending first,
/// never leaving the start empty.
pub fn trailing_splits(word: &str, max_len: usize) -> Vec<(&str, &str)> {
    let mut splits: Vec<_> = word
        .char_indices()
        .rev()
        .take(max_len)
        .take_while(|&(i, _)| i > 0)
        .map(|(i, _)| word.split_at(i))
        .collect();
    splits.reverse();
    splits
}
