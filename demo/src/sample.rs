//! Sample content shown when no items file is given

use ariatabs_core::{Content, Result, TabItem};

pub fn items() -> Result<Vec<TabItem>> {
    Ok(vec![
        TabItem::new(
            "Nils Frahm",
            Content::Text(
                "Nils Frahm is a German musician, composer and record producer based in \
                 Berlin. He is known for combining classical and electronic music and for \
                 an unconventional approach to the piano in which he mixes a grand piano, \
                 upright piano, Roland Juno-60, Rhodes piano, drum machine, and Moog Taurus."
                    .to_string(),
            ),
        )?,
        TabItem::new(
            "Agnes Obel",
            Content::Text(
                "Agnes Caroline Thaarup Obel is a Danish singer/songwriter. Her first album, \
                 Philharmonics, was released by PIAS Recordings on 4 October 2010 in Europe. \
                 Philharmonics was certified gold in June 2011 by the Belgian Entertainment \
                 Association (BEA) for sales of 10,000 Copies."
                    .to_string(),
            ),
        )?,
        TabItem::new(
            "Joke",
            Content::Paragraphs(vec![
                "Fear of complicated buildings:".to_string(),
                "A complex complex complex.".to_string(),
            ]),
        )?,
    ])
}
