//! Server-rendered HTML views.
//!
//! Handlers pick a [`View`], which pairs a template name with the data it
//! renders. Every user-supplied value goes through [`escape`] before it is
//! written into markup.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::domain::contact::{EMAIL_MAX, FIRST_NAME_MAX, LAST_NAME_MAX};
use crate::domain::{Contact, ContactField, ContactForm, ContactFormErrors, ContactId, Country};

/// Raw form values plus the errors from the last validation pass, if any.
#[derive(Debug, Clone, Copy)]
pub struct FormState<'a> {
    /// Values to show in the inputs.
    pub form: &'a ContactForm,
    /// Per-field messages, when the submission was rejected.
    pub errors: Option<&'a ContactFormErrors>,
}

impl<'a> FormState<'a> {
    /// A form that has not been submitted yet.
    #[must_use]
    pub fn fresh(form: &'a ContactForm) -> Self {
        Self { form, errors: None }
    }

    /// A rejected submission to redisplay.
    #[must_use]
    pub fn rejected(form: &'a ContactForm, errors: &'a ContactFormErrors) -> Self {
        Self {
            form,
            errors: Some(errors),
        }
    }
}

/// A page and its data context.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Welcome page.
    Home,
    /// Every contact.
    ContactList(&'a [Contact]),
    /// One contact.
    ContactDetail(&'a Contact),
    /// Creation form.
    ContactCreate(FormState<'a>),
    /// Edit form for the given contact.
    ContactEdit(ContactId, FormState<'a>),
    /// Deletion confirmation.
    ContactDelete(&'a Contact),
    /// Error page.
    Error {
        /// Response status shown in the heading.
        status: StatusCode,
        /// Client-safe message.
        message: &'a str,
        /// Request trace identifier, if known.
        trace_id: Option<&'a str>,
    },
}

impl View<'_> {
    /// Name of the template this view stands for.
    #[must_use]
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Home => "contacts/accueil.html",
            Self::ContactList(_) => "contacts/contact.html",
            Self::ContactDetail(_) => "contacts/contact_details.html",
            Self::ContactCreate(_) => "contacts/contact_ajouter.html",
            Self::ContactEdit(..) => "contacts/contact_change.html",
            Self::ContactDelete(_) => "contacts/contact_delete.html",
            Self::Error { .. } => "contacts/erreur.html",
        }
    }

    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Home => layout(
                "Accueil",
                "<h2>Bienvenue sur notre apk</h2>\n<p><a href=\"/contact/\">Voir les contacts</a></p>",
            ),
            Self::ContactList(contacts) => layout("Contacts", &render_list(contacts)),
            Self::ContactDetail(contact) => {
                layout(&contact.full_name(), &render_detail(contact))
            }
            Self::ContactCreate(state) => layout(
                "Ajouter un contact",
                &render_form("Ajouter un contact", "/contact/ajouter/", *state),
            ),
            Self::ContactEdit(id, state) => layout(
                "Modifier le contact",
                &render_form(
                    "Modifier le contact",
                    &format!("/contact/{id}/modifier/"),
                    *state,
                ),
            ),
            Self::ContactDelete(contact) => {
                layout("Supprimer le contact", &render_delete(contact))
            }
            Self::Error {
                status,
                message,
                trace_id,
            } => layout(
                status.canonical_reason().unwrap_or("Erreur"),
                &render_error(*status, message, *trace_id),
            ),
        }
    }

    /// Build an HTML response with the given status.
    #[must_use]
    pub fn respond(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(self.render())
    }
}

/// Escape text for inclusion in HTML content or attribute values.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

fn country_text(country: Country) -> String {
    format!("{} ({})", country.label(), country.display_code())
}

fn render_list(contacts: &[Contact]) -> String {
    let mut html = String::from("<h1>Contacts</h1>\n");
    if contacts.is_empty() {
        html.push_str("<p>Aucun contact.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for contact in contacts {
            html.push_str(&format!(
                "<li><a href=\"/contact/{}/\">{}</a> <span>{}</span></li>\n",
                contact.id(),
                escape(&contact.full_name()),
                escape(&country_text(contact.details().country))
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("<p><a href=\"/contact/ajouter/\">Ajouter un contact</a></p>");
    html
}

fn render_detail(contact: &Contact) -> String {
    let details = contact.details();
    let id = contact.id();
    let rows = [
        (ContactField::Nom, escape(details.last_name.as_ref())),
        (ContactField::Prenom, escape(details.first_name.as_ref())),
        (ContactField::NumeroTelephone, details.phone_number.to_string()),
        (ContactField::Pays, escape(&country_text(details.country))),
        (ContactField::Email, escape(details.email.as_ref())),
    ];
    let mut html = format!("<h1>{}</h1>\n<dl>\n", escape(&contact.full_name()));
    for (field, value) in rows {
        html.push_str(&format!("<dt>{}</dt><dd>{value}</dd>\n", field.label()));
    }
    html.push_str(&format!(
        "</dl>\n<p><a href=\"/contact/{id}/modifier/\">Modifier</a> | \
         <a href=\"/contact/{id}/supprimer/\">Supprimer</a> | \
         <a href=\"/contact/\">Retour à la liste</a></p>"
    ));
    html
}

fn render_input(html: &mut String, field: ContactField, form: &ContactForm) {
    let name = field.as_str();
    let value = escape(form.value(field));
    match field {
        ContactField::Pays => {
            let selected = form.pays.parse::<Country>().ok();
            html.push_str(&format!("<select id=\"{name}\" name=\"{name}\">\n"));
            for country in Country::ALL {
                let marker = if selected == Some(country) {
                    " selected"
                } else {
                    ""
                };
                html.push_str(&format!(
                    "<option value=\"{}\"{marker}>{}</option>\n",
                    country.slug(),
                    escape(&country_text(country))
                ));
            }
            html.push_str("</select>\n");
        }
        ContactField::Email => {
            html.push_str(&format!(
                "<input type=\"email\" id=\"{name}\" name=\"{name}\" value=\"{value}\" maxlength=\"{EMAIL_MAX}\">\n"
            ));
        }
        ContactField::NumeroTelephone => {
            html.push_str(&format!(
                "<input type=\"text\" inputmode=\"numeric\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n"
            ));
        }
        ContactField::Nom | ContactField::Prenom => {
            let max = if field == ContactField::Nom {
                LAST_NAME_MAX
            } else {
                FIRST_NAME_MAX
            };
            html.push_str(&format!(
                "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" maxlength=\"{max}\">\n"
            ));
        }
    }
}

fn render_form(heading: &str, action: &str, state: FormState<'_>) -> String {
    let mut html = format!("<h1>{}</h1>\n", escape(heading));
    if state.errors.is_some() {
        html.push_str("<p class=\"errors\">Veuillez corriger les erreurs ci-dessous.</p>\n");
    }
    html.push_str(&format!("<form method=\"post\" action=\"{}\">\n", escape(action)));
    for field in ContactField::ALL {
        html.push_str(&format!(
            "<p>\n<label for=\"{}\">{}</label>\n",
            field.as_str(),
            field.label()
        ));
        render_input(&mut html, field, state.form);
        if let Some(error) = state.errors.and_then(|errors| errors.for_field(field)) {
            html.push_str(&format!(
                "<span class=\"error\" data-field=\"{}\">{}</span>\n",
                field.as_str(),
                escape(&error.to_string())
            ));
        }
        html.push_str("</p>\n");
    }
    html.push_str(
        "<button type=\"submit\">Enregistrer</button>\n</form>\n<p><a href=\"/contact/\">Annuler</a></p>",
    );
    html
}

fn render_delete(contact: &Contact) -> String {
    let id = contact.id();
    format!(
        "<h1>Supprimer le contact</h1>\n<p>Voulez-vous vraiment supprimer {} ?</p>\n\
         <form method=\"post\" action=\"/contact/{id}/supprimer/\">\n\
         <button type=\"submit\">Supprimer</button>\n</form>\n\
         <p><a href=\"/contact/{id}/\">Annuler</a></p>",
        escape(&contact.full_name())
    )
}

fn render_error(status: StatusCode, message: &str, trace_id: Option<&str>) -> String {
    let mut html = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n",
        status.as_u16(),
        escape(status.canonical_reason().unwrap_or("Erreur")),
        escape(message)
    );
    if let Some(trace_id) = trace_id {
        html.push_str(&format!("<p><small>Trace : {}</small></p>\n", escape(trace_id)));
    }
    html.push_str("<p><a href=\"/contact/\">Retour à la liste</a></p>");
    html
}
