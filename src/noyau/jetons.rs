// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Fin de l’entrée (EOF)
    Fin,
}

impl Tok {
    /// Jeton d’un caractère symbole de la grammaire (`+ - * / ( )`).
    pub fn symbole(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        }
    }
}

/// État de lecture d’une expression.
///
/// - `texte` : vue en lecture seule (jamais copiée)
/// - `index` : curseur, 0 <= index <= texte.len()
/// - `precision` : max des chiffres après la virgule vus jusqu’ici
/// - `pushback` : un seul jeton “rendu” (la grammaire n’a besoin que d’un cran)
#[derive(Debug)]
pub struct Lecteur<'a> {
    texte: &'a str,
    index: usize,
    precision: usize,
    pushback: Option<Tok>,
}

impl<'a> Lecteur<'a> {
    pub fn new(texte: &'a str) -> Self {
        Self {
            texte,
            index: 0,
            precision: 0,
            pushback: None,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Lit le jeton suivant directement dans le texte (ignore le pushback).
    ///
    /// Pas d’espaces à sauter : le tampon ne contient que des caractères de la grammaire.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Tok, ErreurCalcul> {
        let Some(c) = self.texte[self.index..].chars().next() else {
            return Ok(Tok::Fin);
        };

        if let Some(tok) = Tok::symbole(c) {
            self.index += 1;
            return Ok(tok);
        }

        if c.is_ascii_digit() || c == '.' {
            return self.lire_nombre();
        }

        Err(ErreurCalcul::CaractereInattendu(c))
    }

    /// Jeton suivant : d’abord le pushback s’il existe, sinon le texte.
    pub fn get_token(&mut self) -> Result<Tok, ErreurCalcul> {
        match self.pushback.take() {
            Some(tok) => Ok(tok),
            None => self.next(),
        }
    }

    /// Rend un jeton : il sera renvoyé par le prochain `get_token`.
    pub fn pushback(&mut self, tok: Tok) {
        debug_assert!(self.pushback.is_none(), "pushback déjà occupé");
        self.pushback = Some(tok);
    }

    /// Plus long littéral non signé : `chiffres [. chiffres]` ou `. chiffres`.
    /// Le signe est un moins unaire (géré par l’analyseur, pas ici).
    fn lire_nombre(&mut self) -> Result<Tok, ErreurCalcul> {
        let octets = self.texte.as_bytes();
        let debut = self.index;
        let mut i = debut;

        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
        }
        let mut nb_chiffres = i - debut;

        let mut decimales = 0;
        if i < octets.len() && octets[i] == b'.' {
            i += 1;
            let debut_frac = i;
            while i < octets.len() && octets[i].is_ascii_digit() {
                i += 1;
            }
            decimales = i - debut_frac;
            nb_chiffres += decimales;
        }

        // "." tout seul : rien à convertir
        if nb_chiffres == 0 {
            return Err(ErreurCalcul::NombreInvalide(debut));
        }

        let valeur: f64 = self.texte[debut..i]
            .parse()
            .map_err(|_| ErreurCalcul::NombreInvalide(debut))?;

        self.index = i;
        self.precision = self.precision.max(decimales);

        Ok(Tok::Num(valeur))
    }
}
