/*! Russian morphological analysis with pymorphy2 dictionaries.

Reads the compiled dictionaries of [`pymorphy2`] (string tables, paradigms
and DAWG automata) and analyzes Russian words into `(word, normal form,
tag)` triples. Dictionary words are looked up with `е`/`ё` restoration and
ranked by `p(tag | word)`; unknown words are guessed from particles,
prefixes, hyphenated parts and similar word endings.

[`pymorphy2`]: https://github.com/kmike/pymorphy2

# Usage examples

```no_run
use rumorph::MorphAnalyzer;

let analyzer = MorphAnalyzer::open("/path/to/pymorphy2_dicts_ru/data")?;
for parse in analyzer.xparse("бутявкать") {
    println!("{}", parse);
}
# Ok::<(), rumorph::dictionary::DictionaryError>(())
```

A process-wide analyzer is available through [`global`].

The `rumorph` command in `rumorph-bin`, in the same repository, shows
further usage.

*/

pub mod analyzer;
pub mod dawg;
pub mod dictionary;
pub mod error;
pub mod global;
pub mod paradigm;
pub mod paths;

pub(crate) mod constants;

#[cfg(test)]
mod testutil;

pub use crate::analyzer::{AnalyzerConfig, MorphAnalyzer, Parse};
pub use crate::dictionary::DictionaryData;
pub use crate::error::MorphError;
