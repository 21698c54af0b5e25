// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Règles:
// - * et / lient plus fort que + et -
// - les quatre opérateurs sont associatifs à gauche
// - les parenthèses groupent et doivent s'équilibrer
// - le moins unaire n'existe plus ici : il a été absorbé dans le
//   littéral par le tokenizer

use super::erreurs::{ErreurCalc, Resultat};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

fn est_operateur(t: &Tok) -> bool {
    matches!(t, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurCalc::ParenthesesDesequilibrees);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // dépile tant que l'opérateur du haut doit sortir
                // (associativité gauche : précédence >=)
                while let Some(top) = ops.last() {
                    if !est_operateur(top) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    out.push(ops.pop().expect("sommet vérifié"));
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN avec une pile numérique.
/// La division par zéro est détectée AU POINT de division, jamais par
/// inspection du texte source (un diviseur "6 - 6" au fond d'un nid de
/// parenthèses est donc bien attrapé).
pub fn eval_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(*v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or(ErreurCalc::Syntaxe)?;
                let a = pile.pop().ok_or(ErreurCalc::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::Syntaxe),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::Syntaxe);
    }
    Ok(pile.pop().expect("pile non vide"))
}
