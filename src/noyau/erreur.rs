//! Noyau — erreurs de calcul.
//!
//! Une seule énumération pour tout le pipeline (lecture, analyse, formatage).
//! Remplace la sentinelle NaN : l’appelant sait *pourquoi* ça a échoué,
//! et le formatage n’est jamais appelé sur une valeur invalide.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide à la position {0}")]
    NombreInvalide(usize),

    #[error("opérande manquant")]
    OperandeManquant,

    /// Deux valeurs à la suite, sans opérateur entre elles.
    #[error("valeur inattendue (opérateur attendu)")]
    ValeurInattendue,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("jetons en trop après l’expression")]
    JetonsEnTrop,

    #[error("expression trop imbriquée")]
    TropImbrique,

    /// Résultat non fini (division par zéro…) ou trop grand une fois scalé.
    #[error("résultat hors limites")]
    HorsLimites,
}
