// src/app.rs
//
// Calculette de change — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter/Backspace/Delete sont gérés dans vue.rs (adaptateur clavier).
// - Escape reste ici : action de fermeture côté hôte ; dans cette
//   application autonome, remise à zéro totale.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.calc.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
