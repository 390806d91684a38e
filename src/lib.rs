/*!

Dictionary-backed fuzzy matching based on the Symmetric Delete spelling
correction algorithm, with compound correction of multi-word phrases.

The dictionary is supplied as in-memory unigram and bigram frequency maps and
can be grown afterwards through shared references, concurrently with lookups.

#### Single-word lookup

```rust
use symdel::{SymSpell, Verbosity};

let unigrams = [
    ("book".to_string(), 200u64),
    ("books".to_string(), 120),
    ("cook".to_string(), 100),
];
// max edit distance 2 per dictionary precalculation, prefix length 7
let symspell = SymSpell::new(unigrams, [], 2, 7);

// max edit distance per lookup (must be <= the dictionary precalculation)
let suggestions = symspell.lookup("boks", Verbosity::Top, 2, false).unwrap();
assert_eq!(suggestions[0].term, "books");
assert_eq!(suggestions[0].distance, 1);
```

#### Compound lookup for multi-word input strings

Supports splitting of conjoined words and merging of words broken by a stray
space, ranked with the bigram table:

```rust
use symdel::{Bigram, SymSpell};

let unigrams = [("data".to_string(), 40u64), ("base".to_string(), 30)];
let bigrams = [(Bigram::new("data", "base"), 20u64)];
let symspell = SymSpell::new(unigrams, bigrams, 2, 7);

let suggestion = symspell.lookup_compound("databse", 2, false).unwrap();
assert_eq!(suggestion.term, "data base");
```

*/

mod bigram;
mod chars;
mod distance;
mod error;
mod lexicon;
mod suggestion;
mod symspell;
mod test;

pub use bigram::Bigram;
pub use distance::{DamerauLevenshteinOsa, StringDistance};
pub use error::{LookupError, Result};
pub use lexicon::{DeleteIndex, Lexicon};
pub use suggestion::{Suggestion, Verbosity};
pub use symspell::SymSpell;
