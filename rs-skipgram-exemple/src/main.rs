use rs_skipgram_core::ngram::generator::{
    continuous_ngram_lists, continuous_ngrams, skip_ngrams,
};
use rs_skipgram_core::ngram::input::NGramInput;
use rs_skipgram_core::tokenizer::segment;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Split a sentence into word tokens; empty fragments are dropped
    let words = segment("the cat sat on the mat", r"\s+")?;

    // Build the generation parameters for bigrams (n = 2)
    // 'new' validates n; n = 0 is a precondition violation
    let mut input = NGramInput::new(2)?;
    match NGramInput::new(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("n = 0 is rejected"),
    }

    // Continuous bigrams: every contiguous window of two tokens
    println!("continuous: {:?}", continuous_ngrams(&words, &input)?);

    // The same results as token lists instead of joined strings
    println!("as lists: {:?}", continuous_ngram_lists(&words, &input)?);

    // Character-level tokens: the empty pattern splits between characters
    let chars = segment("abcd", "")?;

    // Skippy bigrams, extended definition (default): leading and trailing
    // gaps survive, rendered with the gap symbol
    input.set_separator("");
    println!("extended: {:?}", skip_ngrams(&chars, &input)?);

    // Regular definition: no result starts or ends with a gap
    input.extended = false;
    println!("regular: {:?}", skip_ngrams(&chars, &input)?);

    // Inclusive mode accepts every result with up to n tokens
    input.inclusive = true;
    println!("inclusive: {:?}", skip_ngrams(&chars, &input)?);

    // A gap budget caps the enumeration: the sequence is divided into
    // overlapping windows of that many positions
    input.inclusive = false;
    input.set_max_gap_size(Some(3))?;
    println!("budgeted: {:?}", skip_ngrams(&chars, &input)?);

    // The budget is range-checked against the lattice mask
    match input.set_max_gap_size(Some(64)) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A budget of 64 is invalid, the mask covers 63 positions"),
    }

    // The gap symbol is configurable but must stay distinct from every
    // real token; a collision is rejected instead of mis-tabulating gaps
    input.set_gap_mark("_")?;
    match skip_ngrams(&segment("a_b", "")?, &input) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Degenerate input: fewer tokens than n returns the whole sequence
    input.set_n(5)?;
    println!("degenerate: {:?}", skip_ngrams(&segment("ab", "")?, &input)?);

    Ok(())
}
