//! Tests scientifiques (campagne) : évaluation + lecture décimale de bout en bout.
//!
//! But : fixer les propriétés visibles à l’écran, sans passer par le clavier.
//! - priorités, associativité, moins unaire
//! - précision = max des décimales vues (jamais la somme)
//! - zéros de tête, signe, troncature
//! - les échecs sont des erreurs explicites, jamais un nombre “au hasard”
//!
//! Limite connue (gardée telle quelle) : troncature, pas arrondi. Une somme
//! comme 1.1+2.2 dont le binaire tombe juste en dessous s’affiche tronquée.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::{evaluer, valeur_ou_nan};
use super::format::formater_texte;

fn calc(expr: &str) -> Result<String, ErreurCalcul> {
    let e = evaluer(expr)?;
    formater_texte(e.valeur, e.precision)
}

fn assert_calc(expr: &str, attendu: &str) {
    let obtenu = calc(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert_eq!(obtenu, attendu, "expr={expr:?}");
}

fn assert_echec(expr: &str) {
    if let Ok(s) = calc(expr) {
        panic!("expr={expr:?} devait échouer, a donné {s:?}");
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites() {
    assert_calc("2+3*4", "14");
    assert_calc("(2+3)*4", "20");
    assert_calc("2*(3+4)*5", "70");
    assert_calc("100/10/5", "2");
    assert_calc("2-3-4", "-5");
}

#[test]
fn sci_moins_unaire_et_parentheses() {
    assert_calc("-5+3", "-2");
    assert_calc("-(2+3)", "-5");
    assert_calc("-(-(4))", "4");
    assert_calc("3*-2", "-6");
    assert_calc("((((7))))", "7");
}

/* ------------------------ Précision ------------------------ */

#[test]
fn sci_precision_max() {
    assert_calc("1.5+2.25", "3.75");
    assert_calc("1.50+0.5", "2.00");
    assert_calc("0.5*4", "2.0");
    assert_calc("10/4", "2");
    assert_calc("10.0/4", "2.5");
}

#[test]
fn sci_zeros_de_tete() {
    assert_calc("0.1-0.05", "0.05");
    assert_calc("0.05-0.1", "-0.05");
    assert_calc("1/8.000", "0.125");
    assert_calc("0.001*1", "0.001");
}

#[test]
fn sci_troncature() {
    assert_calc("2/3", "0");
    assert_calc("2.00/3", "0.66");
    assert_calc("-2.00/3", "-0.66");
}

/* ------------------------ Échecs ------------------------ */

#[test]
fn sci_echecs_explicites() {
    assert_eq!(calc("(2+3"), Err(ErreurCalcul::ParentheseNonFermee));
    assert_eq!(calc(""), Err(ErreurCalcul::OperandeManquant));
    assert_eq!(calc("1/0"), Err(ErreurCalcul::HorsLimites));
    assert_eq!(calc("0/0"), Err(ErreurCalcul::HorsLimites));
    assert_eq!(calc("99999999999*99999999999"), Err(ErreurCalcul::HorsLimites));

    for e in ["+", "2++", "(", ")(", "2*/3", "..5", "5..", "()"] {
        assert_echec(e);
    }
}

#[test]
fn sci_sentinelle_propage_nan() {
    // ancienne convention : NaN se propage dans toute opération ultérieure
    let v = valeur_ou_nan(&evaluer("(2+3"));
    assert!(v.is_nan());
    assert!((v * 10.0 + 1.0).is_nan());
    assert_eq!(formater_texte(v, 0), Err(ErreurCalcul::HorsLimites));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme() {
    for expr in ["2+3*4", "1.5+2.25", "-(2+3)", "0.1-0.05", "(2+3"] {
        let a = calc(expr);
        for _ in 0..5 {
            assert_eq!(calc(expr), a, "expr={expr:?}");
        }
    }
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_longue_somme_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 64 termes "1+" : tient dans le tampon par défaut (128)
    let expr = format!("{}1", "1+".repeat(63));
    assert!(expr.len() <= 128);
    budget(t0, max);
    assert_calc(&expr, "64");

    let expr = format!("{}0.5", "0.5+".repeat(31));
    budget(t0, max);
    assert_calc(&expr, "16.0");
}
