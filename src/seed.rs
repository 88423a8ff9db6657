//! Built-in sample hymns shown on first run.

use chrono::Utc;

use crate::hymn::Hymn;

const GRANDE_LYRICS: &str = "Senhor meu Deus! Quando eu, maravilhado,
Fico a pensar nas obras que criaste,
No céu azul, nas águas, no trovão,
Então minh'alma canta a Ti, Senhor:

Refrão:
Quão grande és Tu! Quão grande és Tu!
Então minh'alma canta a Ti, Senhor:
Quão grande és Tu! Quão grande és Tu!";

const GRANDE_CHORDS: &str = "G                    C              G
Senhor meu Deus! Quando eu, maravilhado,
Em              D              G
Fico a pensar nas obras que criaste,
G                C              G
No céu azul, nas águas, no trovão,
Em              D              G
Então minh'alma canta a Ti, Senhor:

G              C              G
Quão grande és Tu! Quão grande és Tu!
Em              D              G
Então minh'alma canta a Ti, Senhor:
G              C              G
Quão grande és Tu! Quão grande és Tu!";

const LOUVAREI_LYRICS: &str = "Eu te louvarei, ó Senhor, meu Deus
Com todo o meu coração
E glorificarei o teu nome
Para sempre, Senhor

Tu tens feito tantas coisas
Por isso eu te louvo
Tu és digno de receber
Toda honra e glória";

const LOUVAREI_CHORDS: &str = "C              F              G              C
Eu te louvarei, ó Senhor, meu Deus
F              G              C
Com todo o meu coração
C              F              G              C
E glorificarei o teu nome
F              G              C
Para sempre, Senhor";

/// The two non-custom sample records, timestamped now.
///
/// Hymn `1` sits in `harpa-crista`, hymn `2` in `louvores-gerais` and starts
/// out as a favorite.
pub fn default_hymns() -> Vec<Hymn> {
    let now = Utc::now();
    vec![
        Hymn {
            id: "1".to_string(),
            title: "Quão Grande És Tu".to_string(),
            number: Some(43),
            category: "harpa-crista".to_string(),
            key: Some("G".to_string()),
            lyrics: GRANDE_LYRICS.to_string(),
            chords: Some(GRANDE_CHORDS.to_string()),
            is_favorite: false,
            is_custom: false,
            created_at: now,
            updated_at: now,
        },
        Hymn {
            id: "2".to_string(),
            title: "Eu Te Louvarei".to_string(),
            number: None,
            category: "louvores-gerais".to_string(),
            key: Some("C".to_string()),
            lyrics: LOUVAREI_LYRICS.to_string(),
            chords: Some(LOUVAREI_CHORDS.to_string()),
            is_favorite: true,
            is_custom: false,
            created_at: now,
            updated_at: now,
        },
    ]
}
