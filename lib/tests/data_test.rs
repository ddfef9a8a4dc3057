use std::io::Cursor;

use wordle_sim::*;

#[test]
fn corpus_round_trips_through_a_reader() -> Result<(), CorpusError> {
    let mut cursor = Cursor::new(String::from(
        "23135851162\tthe s\n\
         1226734006\tABOUT\n\
         12741391\tcrane\n\
         not-a-number\twords\n\
         4956875\tapple\n",
    ));

    let corpus = Corpus::from_reader(&mut cursor, 5)?;

    // "the s" splits into a three-letter word and is skipped, as is the
    // line with an unparseable frequency.
    let texts: Vec<&str> = corpus.words().iter().map(|word| &*word.text).collect();
    assert_eq!(texts, vec!["about", "crane", "apple"]);
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.word_len(), 5);
    assert_eq!(corpus.words()[0].frequency, 1226734006);
    Ok(())
}

#[test]
fn corpus_word_length_is_configurable() -> Result<(), CorpusError> {
    let mut cursor = Cursor::new(String::from("10 cat\n9 crane\n8 dog\n"));

    let corpus = Corpus::from_reader(&mut cursor, 3)?;

    let texts: Vec<&str> = corpus.words().iter().map(|word| &*word.text).collect();
    assert_eq!(texts, vec!["cat", "dog"]);
    Ok(())
}
