//! End-to-end walk through the submission pipeline against the in-memory store

use std::sync::Arc;

use billed::prelude::*;

struct PrintingRouter;

impl NavigationGateway for PrintingRouter {
    fn on_navigate(&self, route: Route) {
        println!("➡️  navigation vers {:?} ({})", route, route.path());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("🧾 Billed — démonstration du parcours employé\n");

    let store = Arc::new(InMemoryBillStore::new());
    let router = Arc::new(PrintingRouter);
    let session = SessionContext::employee("employee@test.tld");

    // --- New bill form ---
    let new_bill = NewBillController::new(store.clone(), router.clone(), session);

    // A PDF receipt is rejected inline, nothing reaches the store
    new_bill.attach_receipt("facture.pdf").await?;
    println!(
        "❌ facture.pdf : {}",
        new_bill.validation_message().unwrap_or_default()
    );

    // A PNG receipt is accepted and uploaded
    new_bill.attach_receipt("facture.png").await?;
    let receipt = new_bill.receipt().expect("justificatif accepté");
    println!("✅ facture.png téléversée : {}", receipt.file_url);

    // Submit the captured form
    let form = BillForm {
        name: "Séminaire produit".to_string(),
        date: "2023-03-22".to_string(),
        expense_type: "Hôtel et logement".to_string(),
        amount: "150".to_string(),
        vat: "30".to_string(),
        pct: "20".to_string(),
        commentary: "Deux nuits".to_string(),
    };
    match new_bill.submit(&form).await? {
        Submission::Created(created) => println!("✅ note créée (clé {})\n", created.key),
        Submission::Blocked => println!("⛔ soumission bloquée\n"),
    }

    // --- Bills list page ---
    let bills = BillsController::new(store, router);
    match bills.load().await {
        BillsView::Loaded(rows) => {
            println!("📋 {} note(s) de frais :", rows.len());
            for row in &rows {
                println!("   {} | {} | {} | {}", row.date, row.name, row.amount, row.status);
            }
            if let Some(preview) = bills.preview_receipt(0) {
                println!("👁  aperçu du justificatif : {}", preview.image_url);
            }
        }
        BillsView::Failed { message } => println!("🛑 {message}"),
        BillsView::Pristine => {}
    }

    Ok(())
}
