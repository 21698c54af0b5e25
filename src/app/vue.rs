// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé : disposition calculatrice classique, gros boutons
// - Clavier physique : chiffres/./opérateurs saisis, * -> ×, / -> ÷,
//   Enter évalue, Backspace efface un élément, Delete efface tout
//
// L'expression affichée passe par format_expression (milliers) ; la
// chaîne canonique du contrôleur, elle, n'est jamais reformatée.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::{format_expression, format_resultat, format_valeur};

#[derive(Clone, Copy, Debug)]
enum Touche {
    Saisie(&'static str),
    Effacer,
    Retour,
    Signe,
    Pourcent,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier_physique(ui);

        ui.heading("Calculette de change");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // expression (formatée pour l'affichage seulement)
                    let affiche = format_expression(&self.calc.expression);
                    if affiche.is_empty() {
                        ui.monospace("0");
                    } else {
                        ui.monospace(affiche);
                    }

                    // résultat final, ou aperçu discret en cours de frappe
                    if let Some(r) = self.calc.resultat {
                        ui.monospace(
                            egui::RichText::new(format_valeur(r)).size(24.0).strong(),
                        );
                    } else if let Some(a) = self.apercu() {
                        ui.monospace(
                            egui::RichText::new(format!("= {}", format_resultat(a, 2)))
                                .weak(),
                        );
                    }
                });
            });

        if let Some(msg) = self.calc.erreur_texte() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Touche::Effacer);
                self.bouton(ui, "⌫", Touche::Retour);
                self.bouton(ui, "%", Touche::Pourcent);
                self.bouton(ui, "÷", Touche::Saisie("÷"));
                ui.end_row();

                self.bouton(ui, "7", Touche::Saisie("7"));
                self.bouton(ui, "8", Touche::Saisie("8"));
                self.bouton(ui, "9", Touche::Saisie("9"));
                self.bouton(ui, "×", Touche::Saisie("×"));
                ui.end_row();

                self.bouton(ui, "4", Touche::Saisie("4"));
                self.bouton(ui, "5", Touche::Saisie("5"));
                self.bouton(ui, "6", Touche::Saisie("6"));
                self.bouton(ui, "-", Touche::Saisie("-"));
                ui.end_row();

                self.bouton(ui, "1", Touche::Saisie("1"));
                self.bouton(ui, "2", Touche::Saisie("2"));
                self.bouton(ui, "3", Touche::Saisie("3"));
                self.bouton(ui, "+", Touche::Saisie("+"));
                ui.end_row();

                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "0", Touche::Saisie("0"));
                self.bouton(ui, ".", Touche::Saisie("."));
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();

                self.bouton(ui, "(", Touche::Saisie("("));
                self.bouton(ui, ")", Touche::Saisie(")"));
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Saisie(v) => self.calc.saisir(v),
            Touche::Effacer => self.calc.effacer(),
            Touche::Retour => self.calc.retour_arriere(),
            Touche::Signe => self.calc.basculer_signe(),
            Touche::Pourcent => self.calc.pourcentage(),
            Touche::Egal => {
                let _ = self.calc.calculer();
            }
        }
    }

    /* ------------------------ Clavier physique ------------------------ */

    /// Adaptateur clavier : codes bruts -> opérations du contrôleur.
    /// Les frappes illégales sont absorbées par le contrôleur lui-même.
    fn clavier_physique(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' | '.' | '+' | '-' | '(' | ')' => {
                                self.calc.saisir(&c.to_string());
                            }
                            '*' => self.calc.saisir("×"),
                            '/' => self.calc.saisir("÷"),
                            '=' => {
                                let _ = self.calc.calculer();
                            }
                            '%' => self.calc.pourcentage(),
                            _ => {}
                        }
                    }
                }

                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => {
                        let _ = self.calc.calculer();
                    }
                    egui::Key::Backspace => self.calc.retour_arriere(),
                    egui::Key::Delete => self.calc.effacer(),
                    _ => {}
                },

                _ => {}
            }
        }
    }
}
