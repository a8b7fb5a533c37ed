//! Outbound contact links.
//!
//! The kiosk never talks to the network itself; reaching the clinic
//! means opening a WhatsApp or Maps deep link in the system browser
//! with a prefilled, URL-encoded message.

/// Clinic WhatsApp number in international format, digits only.
pub const CLINIC_WHATSAPP: &str = "5561981922627";
pub const CLINIC_PHONE_DISPLAY: &str = "(61) 98192-2627";

const TICKET_MESSAGE: &str = "🚀 *PASSAPORTE DA MISSÃO* 🚀\n\nOlá! Gostaria de agendar uma consulta para meu filho(a).\n\n*Nome da criança:* \n*Idade:* \n*Melhor dia/horário:* \n\nEstamos prontos para a aventura! ✨";

const FAB_MESSAGE: &str = "Olá! Gostaria de agendar uma consulta para meu filho(a).\n\n*Nome da criança:* \n*Idade:* \n*Melhor horário:* \n\nVi o site e fiquei interessado(a) nas salas temáticas! ✨";

const QUESTION_MESSAGE: &str = "Olá! Tenho uma dúvida sobre o tratamento...";

const MAPS_QUERY: &str = "Centro Clinico do Lago QI 09 Bloco E2 Sala 201";

pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        CLINIC_WHATSAPP,
        urlencoding::encode(message)
    )
}

/// Prefilled boarding-pass request, the ticket modal's confirm target.
pub fn appointment_link() -> String {
    whatsapp_link(TICKET_MESSAGE)
}

/// Shorter variant used by the floating WhatsApp button.
pub fn fab_link() -> String {
    whatsapp_link(FAB_MESSAGE)
}

/// Prefilled open question, linked from the FAQ section.
pub fn question_link() -> String {
    whatsapp_link(QUESTION_MESSAGE)
}

/// Clinic pin on Google Maps.
pub fn maps_link() -> String {
    format!(
        "https://maps.google.com/?q={}",
        urlencoding::encode(MAPS_QUERY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_target_the_clinic_number() {
        for link in [appointment_link(), fab_link(), question_link()] {
            assert!(link.starts_with("https://wa.me/5561981922627?text="));
        }
    }

    #[test]
    fn test_messages_are_url_encoded() {
        let link = appointment_link();
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%20"));
        // "Olá" encodes its accent.
        assert!(link.contains("Ol%C3%A1"));
    }

    #[test]
    fn test_question_link_matches_published_form() {
        assert!(question_link().contains("d%C3%BAvida%20sobre%20o%20tratamento"));
    }

    #[test]
    fn test_maps_link_is_a_single_token() {
        let link = maps_link();
        assert!(link.starts_with("https://maps.google.com/?q="));
        assert!(!link.contains(' '));
    }
}
