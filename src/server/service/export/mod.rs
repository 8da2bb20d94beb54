//! Spreadsheet and PDF exports.
//!
//! Entity lists and the financial report are exported as xlsx workbooks; single
//! contracts and offers as one-page PDF documents carrying the company header.

pub mod pdf;
pub mod xlsx;

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::api::format_cents,
    server::{
        data::{
            company::CompanyRepository, contract::ContractRepository, issue::IssueRepository,
            offer::OfferRepository, owner::OwnerRepository, property::PropertyRepository,
            provider::ProviderRepository, tenant::TenantRepository,
        },
        error::AppError,
        model::{
            company::Company,
            export::{Cell, Export, ExportEntity, PdfContent, PdfSection, Sheet},
            property::Property,
            report::FinancialReport,
            scope::Scope,
        },
        service::export::{pdf::render_pdf, xlsx::write_workbook},
    },
};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exports every record of one kind in the company as a workbook.
    ///
    /// # Returns
    /// - `Ok(Export)` - `{entity}-{date}.xlsx` with one row per record
    /// - `Err(AppError)` - Database or spreadsheet failure
    pub async fn entity_workbook(
        &self,
        company_id: i32,
        entity: ExportEntity,
    ) -> Result<Export, AppError> {
        let sheet = match entity {
            ExportEntity::Owners => self.owners_sheet(company_id).await?,
            ExportEntity::Tenants => self.tenants_sheet(company_id).await?,
            ExportEntity::Providers => self.providers_sheet(company_id).await?,
            ExportEntity::Properties => self.properties_sheet(company_id).await?,
            ExportEntity::Contracts => self.contracts_sheet(company_id).await?,
            ExportEntity::Issues => self.issues_sheet(company_id).await?,
            ExportEntity::Offers => self.offers_sheet(company_id).await?,
        };

        Ok(Export {
            file_name: format!("{}-{}.xlsx", entity, Utc::now().date_naive()),
            content_type: XLSX_CONTENT_TYPE,
            bytes: write_workbook(&[sheet])?,
        })
    }

    /// Exports a computed financial report with a property and an owner sheet.
    pub fn report_workbook(&self, report: &FinancialReport) -> Result<Export, AppError> {
        let headers = vec!["Name", "Income", "Management fee", "Expenses", "Net"];

        let mut properties = Sheet::new("Properties", headers.clone());
        for row in &report.properties {
            let f = &row.financials;
            properties.push(vec![
                Cell::text(&row.property_name),
                Cell::money(f.income_cents),
                Cell::money(f.management_fee_cents),
                Cell::money(f.expenses_cents),
                Cell::money(f.net_cents()),
            ]);
        }
        let t = &report.totals;
        properties.push(vec![
            Cell::text("Total"),
            Cell::money(t.income_cents),
            Cell::money(t.management_fee_cents),
            Cell::money(t.expenses_cents),
            Cell::money(t.net_cents()),
        ]);

        let mut owners = Sheet::new("Owners", headers);
        for row in &report.owners {
            let f = &row.financials;
            owners.push(vec![
                Cell::text(&row.owner_name),
                Cell::money(f.income_cents),
                Cell::money(f.management_fee_cents),
                Cell::money(f.expenses_cents),
                Cell::money(f.net_cents()),
            ]);
        }

        let period = match report.period.month {
            Some(month) => format!("{}-{:02}", report.period.year, month),
            None => report.period.year.to_string(),
        };

        Ok(Export {
            file_name: format!("financial-report-{}.xlsx", period),
            content_type: XLSX_CONTENT_TYPE,
            bytes: write_workbook(&[properties, owners])?,
        })
    }

    /// Renders a contract with its property, owner, tenant and terms
    pub async fn contract_pdf(&self, company_id: i32, id: i32) -> Result<Export, AppError> {
        let scope = Scope::company(company_id);
        let company = self.company(company_id).await?;

        let contract = ContractRepository::new(self.db)
            .find_by_id(&scope, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contract {} not found", id)))?;
        let property = PropertyRepository::new(self.db)
            .find_by_id(&scope, contract.property_id)
            .await?;
        let tenant = TenantRepository::new(self.db)
            .find_by_id(company_id, contract.tenant_id)
            .await?;

        let mut property_section = PdfSection::new("Property");
        if let Some(property) = &property {
            let owner = OwnerRepository::new(self.db)
                .find_by_id(company_id, property.owner_id)
                .await?;

            property_section = property_section
                .line("Name", &property.name)
                .line("Address", full_address(property))
                .line("Owner", owner.map(|o| o.name).unwrap_or_default());
        }

        let mut tenant_section = PdfSection::new("Tenant");
        if let Some(tenant) = tenant {
            tenant_section = tenant_section
                .line("Name", tenant.name)
                .line("Email", tenant.email.unwrap_or_default())
                .line("Phone", tenant.phone.unwrap_or_default());
        }

        let terms = PdfSection::new("Terms")
            .line("Status", contract.status.as_str())
            .line("Start date", date(contract.start_date))
            .line(
                "End date",
                contract.end_date.map_or("Open-ended".to_string(), date),
            )
            .line("Monthly rent", format_cents(contract.monthly_rent_cents))
            .line("Deposit", format_cents(contract.deposit_cents))
            .line(
                "Payment day",
                format!("Day {} of each month", contract.payment_day),
            );

        let mut sections = vec![property_section, tenant_section, terms];
        if let Some(notes) = contract.notes {
            sections.push(PdfSection::new("Notes").line("", notes));
        }

        let content = PdfContent {
            title: format!("Rental contract #{}", contract.id),
            header: company_header(&company),
            sections,
        };

        Ok(Export {
            file_name: format!("contract-{}.pdf", contract.id),
            content_type: PDF_CONTENT_TYPE,
            bytes: render_pdf(&content)?,
        })
    }

    /// Renders an offer with its property, provider and issue
    pub async fn offer_pdf(&self, company_id: i32, id: i32) -> Result<Export, AppError> {
        let scope = Scope::company(company_id);
        let company = self.company(company_id).await?;

        let offer = OfferRepository::new(self.db)
            .find_by_id(&scope, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Offer {} not found", id)))?;

        let mut details = PdfSection::new("Offer")
            .line("Title", &offer.title)
            .line("Amount", format_cents(offer.amount_cents))
            .line("Status", offer.status.as_str())
            .line("Created", date(offer.created_at.date_naive()));
        if let Some(valid_until) = offer.valid_until {
            details = details.line("Valid until", date(valid_until));
        }
        if let Some(decided_at) = offer.decided_at {
            details = details.line("Decided", date(decided_at.date_naive()));
        }

        let mut sections = vec![details];

        if let Some(property_id) = offer.property_id {
            if let Some(property) = PropertyRepository::new(self.db)
                .find_by_id(&scope, property_id)
                .await?
            {
                sections.push(
                    PdfSection::new("Property")
                        .line("Name", &property.name)
                        .line("Address", full_address(&property)),
                );
            }
        }

        if let Some(provider_id) = offer.provider_id {
            if let Some(provider) = ProviderRepository::new(self.db)
                .find_by_id(company_id, provider_id)
                .await?
            {
                sections.push(
                    PdfSection::new("Provider")
                        .line("Name", provider.name)
                        .line("Service", provider.service_type.unwrap_or_default())
                        .line("Email", provider.email.unwrap_or_default())
                        .line("Phone", provider.phone.unwrap_or_default()),
                );
            }
        }

        if let Some(issue_id) = offer.issue_id {
            if let Some(issue) = IssueRepository::new(self.db)
                .find_by_id(&scope, issue_id)
                .await?
            {
                sections.push(
                    PdfSection::new("Issue")
                        .line("Title", issue.title)
                        .line("Priority", issue.priority.as_str())
                        .line("Status", issue.status.as_str()),
                );
            }
        }

        if let Some(description) = offer.description {
            sections.push(PdfSection::new("Description").line("", description));
        }

        let content = PdfContent {
            title: format!("Offer #{}: {}", offer.id, offer.title),
            header: company_header(&company),
            sections,
        };

        Ok(Export {
            file_name: format!("offer-{}.pdf", offer.id),
            content_type: PDF_CONTENT_TYPE,
            bytes: render_pdf(&content)?,
        })
    }

    async fn company(&self, company_id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", company_id)))
    }

    async fn owners_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let mut sheet = Sheet::new(
            "Owners",
            vec!["ID", "Name", "Email", "Phone", "Address", "IBAN", "Notes", "Created"],
        );

        for owner in OwnerRepository::new(self.db).get_all(company_id).await? {
            sheet.push(vec![
                Cell::Number(owner.id.into()),
                Cell::text(owner.name),
                Cell::optional(owner.email),
                Cell::optional(owner.phone),
                Cell::optional(owner.address),
                Cell::optional(owner.iban),
                Cell::optional(owner.notes),
                Cell::text(date(owner.created_at.date_naive())),
            ]);
        }

        Ok(sheet)
    }

    async fn tenants_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let mut sheet = Sheet::new("Tenants", vec!["ID", "Name", "Email", "Phone", "Notes", "Created"]);

        for tenant in TenantRepository::new(self.db).get_all(company_id).await? {
            sheet.push(vec![
                Cell::Number(tenant.id.into()),
                Cell::text(tenant.name),
                Cell::optional(tenant.email),
                Cell::optional(tenant.phone),
                Cell::optional(tenant.notes),
                Cell::text(date(tenant.created_at.date_naive())),
            ]);
        }

        Ok(sheet)
    }

    async fn providers_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let mut sheet = Sheet::new(
            "Providers",
            vec!["ID", "Name", "Email", "Phone", "Service type", "Notes", "Created"],
        );

        for provider in ProviderRepository::new(self.db).get_all(company_id).await? {
            sheet.push(vec![
                Cell::Number(provider.id.into()),
                Cell::text(provider.name),
                Cell::optional(provider.email),
                Cell::optional(provider.phone),
                Cell::optional(provider.service_type),
                Cell::optional(provider.notes),
                Cell::text(date(provider.created_at.date_naive())),
            ]);
        }

        Ok(sheet)
    }

    async fn properties_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let owners = self.owner_names(company_id).await?;
        let mut sheet = Sheet::new(
            "Properties",
            vec![
                "ID",
                "Name",
                "Owner",
                "Address",
                "City",
                "Postal code",
                "Type",
                "Monthly rent",
            ],
        );

        for property in PropertyRepository::new(self.db)
            .get_all(&Scope::company(company_id))
            .await?
        {
            sheet.push(vec![
                Cell::Number(property.id.into()),
                Cell::text(property.name),
                Cell::optional(owners.get(&property.owner_id).cloned()),
                Cell::text(property.address),
                Cell::text(property.city),
                Cell::optional(property.postal_code),
                Cell::text(property.property_type),
                Cell::money(property.monthly_rent_cents),
            ]);
        }

        Ok(sheet)
    }

    async fn contracts_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let scope = Scope::company(company_id);
        let properties = self.property_names(&scope).await?;
        let tenants: HashMap<i32, String> = TenantRepository::new(self.db)
            .get_all(company_id)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        let mut sheet = Sheet::new(
            "Contracts",
            vec![
                "ID",
                "Property",
                "Tenant",
                "Start",
                "End",
                "Monthly rent",
                "Deposit",
                "Payment day",
                "Status",
            ],
        );

        for contract in ContractRepository::new(self.db).get_all(&scope).await? {
            sheet.push(vec![
                Cell::Number(contract.id.into()),
                Cell::optional(properties.get(&contract.property_id).cloned()),
                Cell::optional(tenants.get(&contract.tenant_id).cloned()),
                Cell::text(date(contract.start_date)),
                Cell::optional(contract.end_date.map(date)),
                Cell::money(contract.monthly_rent_cents),
                Cell::money(contract.deposit_cents),
                Cell::Number(contract.payment_day.into()),
                Cell::text(contract.status.as_str()),
            ]);
        }

        Ok(sheet)
    }

    async fn issues_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let scope = Scope::company(company_id);
        let properties = self.property_names(&scope).await?;
        let providers = self.provider_names(company_id).await?;

        let mut sheet = Sheet::new(
            "Issues",
            vec![
                "ID", "Property", "Title", "Priority", "Status", "Provider", "Created", "Resolved",
            ],
        );

        for issue in IssueRepository::new(self.db).get_all(&scope).await? {
            sheet.push(vec![
                Cell::Number(issue.id.into()),
                Cell::optional(properties.get(&issue.property_id).cloned()),
                Cell::text(issue.title),
                Cell::text(issue.priority.as_str()),
                Cell::text(issue.status.as_str()),
                Cell::optional(issue.provider_id.and_then(|id| providers.get(&id).cloned())),
                Cell::text(date(issue.created_at.date_naive())),
                Cell::optional(issue.resolved_at.map(|at| date(at.date_naive()))),
            ]);
        }

        Ok(sheet)
    }

    async fn offers_sheet(&self, company_id: i32) -> Result<Sheet, AppError> {
        let scope = Scope::company(company_id);
        let properties = self.property_names(&scope).await?;
        let providers = self.provider_names(company_id).await?;

        let mut sheet = Sheet::new(
            "Offers",
            vec![
                "ID",
                "Title",
                "Property",
                "Provider",
                "Amount",
                "Status",
                "Valid until",
                "Decided",
            ],
        );

        for offer in OfferRepository::new(self.db).get_all(&scope).await? {
            sheet.push(vec![
                Cell::Number(offer.id.into()),
                Cell::text(offer.title),
                Cell::optional(offer.property_id.and_then(|id| properties.get(&id).cloned())),
                Cell::optional(offer.provider_id.and_then(|id| providers.get(&id).cloned())),
                Cell::money(offer.amount_cents),
                Cell::text(offer.status.as_str()),
                Cell::optional(offer.valid_until.map(date)),
                Cell::optional(offer.decided_at.map(|at| date(at.date_naive()))),
            ]);
        }

        Ok(sheet)
    }

    async fn owner_names(&self, company_id: i32) -> Result<HashMap<i32, String>, AppError> {
        Ok(OwnerRepository::new(self.db)
            .get_all(company_id)
            .await?
            .into_iter()
            .map(|o| (o.id, o.name))
            .collect())
    }

    async fn property_names(&self, scope: &Scope) -> Result<HashMap<i32, String>, AppError> {
        Ok(PropertyRepository::new(self.db)
            .get_all(scope)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect())
    }

    async fn provider_names(&self, company_id: i32) -> Result<HashMap<i32, String>, AppError> {
        Ok(ProviderRepository::new(self.db)
            .get_all(company_id)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect())
    }
}

fn company_header(company: &Company) -> Vec<String> {
    let mut lines = vec![company.name.clone()];
    lines.extend(company.address.clone());

    let contact = match &company.phone {
        Some(phone) => format!("{} / {}", company.email, phone),
        None => company.email.clone(),
    };
    lines.push(contact);

    lines
}

fn full_address(property: &Property) -> String {
    match &property.postal_code {
        Some(postal_code) => format!("{}, {} {}", property.address, postal_code, property.city),
        None => format!("{}, {}", property.address, property.city),
    }
}

fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}
