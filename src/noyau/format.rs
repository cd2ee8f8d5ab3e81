// src/noyau/format.rs
//
// Lecture décimale d’un résultat f64 SANS conversion flottant -> texte :
//  - multiplie par 10^precision
//  - tronque vers un entier (i64, vérifié)
//  - écrit les chiffres de l’entier, avec le point au bon endroit
//
// Inexact pour les très grands nombres (limite f64), jamais faux sur le signe.

use num_traits::ToPrimitive;

use super::erreur::ErreurCalcul;

/// u64::MAX tient sur 20 chiffres (|i64::MIN| aussi).
const CHIFFRES_MAX: usize = 20;

/// Chiffres décimaux d’un entier, écrits dans un tampon fixe.
struct Chiffres {
    octets: [u8; CHIFFRES_MAX],
    debut: usize,
}

impl Chiffres {
    fn de(mut n: u64) -> Self {
        let mut octets = [b'0'; CHIFFRES_MAX];
        let mut debut = CHIFFRES_MAX;
        loop {
            debut -= 1;
            octets[debut] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        Self { octets, debut }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.octets[self.debut..]
    }
}

/// Formate `valeur` avec exactement `precision` chiffres après le point,
/// caractère par caractère via `emettre`.
///
/// Rien n’est émis en cas d’erreur (non fini, ou trop grand une fois scalé).
pub fn formater<F: FnMut(char)>(
    valeur: f64,
    precision: usize,
    mut emettre: F,
) -> Result<(), ErreurCalcul> {
    let mut scaled = valeur;
    for _ in 0..precision {
        scaled *= 10.0;
    }

    // to_i64 : troncature vers zéro, None si NaN / ±inf / hors i64
    let entier = scaled.to_i64().ok_or(ErreurCalcul::HorsLimites)?;

    let chiffres = Chiffres::de(entier.unsigned_abs());
    let chiffres = chiffres.as_bytes();
    let n = chiffres.len();

    // le signe ne compte pas dans les positions
    if entier < 0 {
        emettre('-');
    }

    if n <= precision {
        // |valeur| < 1 à cette échelle : il manque le "0." et des zéros
        emettre('0');
        emettre('.');
        for _ in n..precision {
            emettre('0');
        }
        for &c in chiffres {
            emettre(c as char);
        }
        return Ok(());
    }

    let point = n - precision;
    for (i, &c) in chiffres.iter().enumerate() {
        if i == point {
            emettre('.');
        }
        emettre(c as char);
    }
    Ok(())
}

/// Variante utilitaire : tout dans une String (tests, affichage UI).
pub fn formater_texte(valeur: f64, precision: usize) -> Result<String, ErreurCalcul> {
    let mut out = String::new();
    formater(valeur, precision, |c| out.push(c))?;
    Ok(out)
}
