//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler lecteur/évaluation/lecture décimale sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, et une erreur ne produit aucun caractère

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval::evaluer;
use super::format::formater;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(4) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", rng.pick(10)),
        2 => format!("{entier}.{:02}", rng.pick(100)),
        _ => format!("0.{:03}", rng.pick(1000)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("{}+{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{}-{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{}/{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})", gen_expr(rng, depth - 1)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/// Suite de touches au hasard (alphabet du tampon uniquement).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789+-*/().";
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Helpers ------------------------ */

/// Évalue + formate, en vérifiant qu’un échec n’émet rien.
fn pipeline(expr: &str) -> Result<String, ErreurCalcul> {
    let e = evaluer(expr)?;
    let mut out = String::new();
    let r = formater(e.valeur, e.precision, |c| out.push(c));
    if r.is_err() {
        assert!(out.is_empty(), "expr={expr:?} : sortie partielle {out:?}");
    }
    r.map(|()| out)
}

fn forme_decimale_valide(s: &str, precision: usize) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    match corps.split_once('.') {
        None => precision == 0 && !corps.is_empty() && corps.bytes().all(|b| b.is_ascii_digit()),
        Some((ent, frac)) => {
            !ent.is_empty()
                && ent.bytes().all(|b| b.is_ascii_digit())
                && frac.len() == precision
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_forme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let premier = pipeline(&expr);

        // Même entrée => même sortie
        assert_eq!(pipeline(&expr), premier, "expr={expr:?}");

        match premier {
            Ok(s) => {
                let precision = evaluer(&expr).map(|e| e.precision).unwrap_or(0);
                assert!(
                    forme_decimale_valide(&s, precision),
                    "forme invalide: expr={expr:?} sortie={s:?}"
                );
                seen_ok += 1;
            }
            Err(e) => {
                // Expressions bien formées : seuls les résultats hors limites échouent
                assert_eq!(e, ErreurCalcul::HorsLimites, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok} (erreurs: {seen_err})");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(12) as usize;
        let bruit = gen_bruit(&mut rng, len);

        match pipeline(&bruit) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // Le bruit doit balayer les deux côtés.
    assert!(seen_ok > 0, "aucun succès: bruit trop “sale”");
    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}

#[test]
fn fuzz_safe_parentheses_desequilibrees() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 3);
        let ouvert = format!("({expr}");
        assert_eq!(
            pipeline(&ouvert),
            Err(ErreurCalcul::ParentheseNonFermee),
            "expr={ouvert:?}"
        );

        let ferme = format!("{expr})");
        assert_eq!(
            pipeline(&ferme),
            Err(ErreurCalcul::JetonsEnTrop),
            "expr={ferme:?}"
        );
    }
}
