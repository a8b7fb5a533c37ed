//! Reino Desktop - entry point for the Iced kiosk application.

use anyhow::Context;
use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration, Instant};
use iced::widget::canvas::Canvas;
use iced::widget::{
    button, column, container, mouse_area, progress_bar, row, scrollable, stack, text, Space,
};
use iced::{
    event, mouse, window, Alignment, Color, Element, Event, Length, Padding, Point, Size,
    Subscription, Task,
};
use iced_fonts::bootstrap;
use reino_core::contact;
use reino_core::content::{
    clinic, headers, hero, ticket, Section, World, FAQS, HERO_STATS, TESTIMONIALS, WORLDS,
};
use reino_core::{Settings, SoundService};
use reino_desktop::animation::{
    CarouselState, FaqState, LoadingState, ModalState, ParticleFieldState, StarfieldState,
    WorldCardState,
};
use reino_desktop::canvas::{ConstellationField, ParticleField, WorldCard};
use reino_desktop::styles::{
    backdrop_style, badge_style, card_style, carousel_dot_style, fab_button_style, faq_row_style,
    footer_style, ghost_button_style, icon_button_style, loading_veil_style, modal_card_style,
    nav_bar_style, nav_link_style, primary_button_style, ticket_panel_style,
};
use reino_desktop::{
    app_theme, palette, world_accent, PaletteColors, CONTENT_MAX_WIDTH, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, MODAL_WIDTH, NAV_CONDENSE_OFFSET, STARFIELD_OPACITY,
    TICKET_LAUNCH_DELAY_MS, TICK_INTERVAL_MS, WORLD_CARD_COUNT, WORLD_CARD_HEIGHT,
};
use std::path::PathBuf;

/// Application state.
struct App {
    /// Persisted kiosk settings (sound, pointer kind, ambient effects)
    settings: Settings,
    /// Where settings are saved; None when the home directory is unknown
    settings_path: Option<PathBuf>,
    sound: SoundService,
    starfield: StarfieldState,
    particles: ParticleFieldState,
    loading: LoadingState,
    carousel: CarouselState,
    faq: FaqState,
    modal: ModalState,
    /// Tilt card states for the four themed worlds
    world_cards: Vec<WorldCardState>,
    /// Section highlighted in the navigation bar
    current_section: Section,
    scroll_offset: f32,
    /// Previous animation tick, used to derive a monotonic frame delta
    last_tick: Option<Instant>,
    /// Cleared on shutdown so in-flight messages become inert
    active: bool,
    /// Error message if initialization failed
    init_error: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    PointerMoved(Point),
    WindowResized(Size),
    FocusChanged(bool),
    Scrolled(scrollable::Viewport),
    NavigateTo(Section),
    WorldEntered(usize),
    WorldMoved(usize, Point),
    WorldExited(usize),
    FaqToggled(usize),
    CarouselSelected(usize),
    SkipLoading,
    ToggleSound,
    OpenTicket,
    CloseTicket,
    ConfirmTicket,
    LaunchUrl(String),
    CloseRequested,
}

impl App {
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            Ok(app) => (app, Task::none()),
            Err(err) => {
                eprintln!("Initialization error: {err:#}");
                (Self::error_state(format!("{err:#}")), Task::none())
            }
        }
    }

    fn try_init() -> anyhow::Result<Self> {
        let settings_path =
            Settings::default_path().context("could not resolve the settings directory")?;
        let settings = Settings::load_from(&settings_path);
        let sound = SoundService::new(settings.sound_enabled, settings.is_coarse_pointer());

        Ok(Self {
            settings,
            settings_path: Some(settings_path),
            sound,
            starfield: StarfieldState::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            particles: ParticleFieldState::default(),
            loading: LoadingState::default(),
            carousel: CarouselState::new(TESTIMONIALS.len()),
            faq: FaqState::default(),
            modal: ModalState::default(),
            world_cards: (0..WORLD_CARD_COUNT).map(|_| WorldCardState::default()).collect(),
            current_section: Section::Hero,
            scroll_offset: 0.0,
            last_tick: None,
            active: true,
            init_error: None,
        })
    }

    /// Fallback state shown when initialization fails.
    fn error_state(message: String) -> Self {
        Self {
            settings: Settings::default(),
            settings_path: None,
            sound: SoundService::new(false, false),
            starfield: StarfieldState::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            particles: ParticleFieldState::default(),
            loading: LoadingState::default(),
            carousel: CarouselState::new(TESTIMONIALS.len()),
            faq: FaqState::default(),
            modal: ModalState::default(),
            world_cards: (0..WORLD_CARD_COUNT).map(|_| WorldCardState::default()).collect(),
            current_section: Section::Hero,
            scroll_offset: 0.0,
            last_tick: None,
            active: true,
            init_error: Some(message),
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = self.settings.save_to(path) {
            eprintln!("Failed to save settings: {err}");
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if !self.active {
            return Task::none();
        }

        match message {
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|earlier| now.duration_since(earlier).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_tick = Some(now);

                self.loading.update(dt);
                if self.settings.ambient_effects {
                    self.starfield.update(dt);
                    if self.starfield.visible {
                        self.particles.update(dt);
                    }
                }
                if self.loading.is_dismissed() {
                    self.carousel.update(dt);
                }
                self.modal.update();
                self.faq.update();
                for card in &mut self.world_cards {
                    card.update(dt);
                }
                Task::none()
            }
            Message::PointerMoved(position) => {
                // Coarse pointers never steer the parallax; taps would
                // teleport it.
                if !self.settings.is_coarse_pointer() {
                    self.starfield.set_pointer(position.x, position.y);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.starfield.rebuild(size.width, size.height);
                self.particles.cache.clear();
                Task::none()
            }
            Message::FocusChanged(focused) => {
                self.starfield.visible = focused;
                if focused {
                    // Drop the stale instant so the first frame back does
                    // not see the whole unfocused gap as one delta.
                    self.last_tick = None;
                }
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                self.current_section = section_at(viewport.relative_offset().y);
                Task::none()
            }
            Message::NavigateTo(section) => {
                self.current_section = section;
                self.sound.play_click();
                scrollable::snap_to(
                    scroll_id(),
                    scrollable::RelativeOffset {
                        x: 0.0,
                        y: section_offset(section),
                    },
                )
            }
            Message::WorldEntered(index) => {
                if let Some(card) = self.world_cards.get_mut(index) {
                    card.set_hovered(true);
                }
                self.sound.play_hover();
                Task::none()
            }
            Message::WorldMoved(index, position) => {
                if let Some(card) = self.world_cards.get_mut(index) {
                    card.set_mouse_position(position);
                }
                Task::none()
            }
            Message::WorldExited(index) => {
                if let Some(card) = self.world_cards.get_mut(index) {
                    card.set_hovered(false);
                }
                Task::none()
            }
            Message::FaqToggled(index) => {
                self.faq.toggle(index);
                self.sound.play_click();
                Task::none()
            }
            Message::CarouselSelected(index) => {
                self.carousel.select(index);
                self.sound.play_click();
                Task::none()
            }
            Message::SkipLoading => {
                self.loading.skip();
                Task::none()
            }
            Message::ToggleSound => {
                let enabled = !self.settings.sound_enabled;
                self.settings.sound_enabled = enabled;
                self.sound.set_enabled(enabled);
                if enabled {
                    self.sound.play_click();
                }
                self.save_settings();
                Task::none()
            }
            Message::OpenTicket => {
                self.modal.open();
                self.sound.play_click();
                Task::none()
            }
            Message::CloseTicket => {
                self.modal.close();
                Task::none()
            }
            Message::ConfirmTicket => {
                self.sound.play_click();
                self.modal.close();
                // Let the chime land before handing off to WhatsApp.
                Task::future(async {
                    tokio::time::sleep(Duration::from_millis(TICKET_LAUNCH_DELAY_MS)).await;
                    Message::LaunchUrl(contact::appointment_link())
                })
            }
            Message::LaunchUrl(url) => {
                if let Err(err) = open::that(&url) {
                    eprintln!("Failed to open {url}: {err}");
                }
                Task::none()
            }
            Message::CloseRequested => {
                self.save_settings();
                self.active = false;
                iced::exit()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if !self.active {
            return Subscription::none();
        }
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);
        let window_events = event::listen_with(on_window_event);
        Subscription::batch(vec![ticks, window_events])
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        // Show error dialog if initialization failed
        if let Some(ref error) = self.init_error {
            return self.error_view(error, pal);
        }

        let mut layers: Vec<Element<'_, Message>> = Vec::new();

        if self.settings.ambient_effects {
            let starfield = Canvas::new(ConstellationField::<Message>::new(
                &self.starfield,
                STARFIELD_OPACITY,
                self.settings.is_coarse_pointer(),
            ))
            .width(Length::Fill)
            .height(Length::Fill);
            layers.push(starfield.into());

            let particles =
                Canvas::new(ParticleField::<Message>::new(&self.particles, pal, 1.0))
                    .width(Length::Fill)
                    .height(Length::Fill);
            layers.push(particles.into());
        }

        let sections = column![
            self.hero_section(pal),
            self.worlds_section(pal),
            self.testimonials_section(pal),
            self.faq_section(pal),
            self.contact_section(pal),
            self.footer(pal),
        ]
        .width(Length::Fill);

        let page = scrollable(sections)
            .id(scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);
        layers.push(page.into());

        layers.push(self.nav_bar(pal));
        layers.push(self.floating_buttons(pal));

        let modal_progress = self.modal.progress();
        layers.push(if modal_progress > 0.01 {
            self.ticket_overlay(pal, modal_progress)
        } else {
            Space::new().into()
        });

        if self.loading.is_visible() {
            layers.push(self.loading_overlay(pal));
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn nav_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let brand = row![
            bootstrap::stars().size(18).style(move |_| iced::widget::text::Style {
                color: Some(pal.accent)
            }),
            text("Reino Mágico").size(18).style(move |_| iced::widget::text::Style {
                color: Some(pal.text)
            }),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut links = row![].spacing(4).align_y(Alignment::Center);
        for section in Section::ALL {
            links = links.push(
                button(text(section.label()).size(14))
                    .on_press(Message::NavigateTo(section))
                    .padding([8, 12])
                    .style(nav_link_style(pal, self.current_section == section)),
            );
        }

        let cta = button(text("Agendar Consulta").size(14))
            .on_press(Message::OpenTicket)
            .padding([8, 18])
            .style(primary_button_style(pal));

        let bar = row![
            brand,
            Space::new().width(Length::Fill),
            links,
            Space::new().width(Length::Fixed(12.0)),
            cta,
        ]
        .align_y(Alignment::Center)
        .padding([12, 24]);

        let condensed = self.scroll_offset > NAV_CONDENSE_OFFSET;
        container(bar)
            .width(Length::Fill)
            .style(nav_bar_style(pal, condensed))
            .into()
    }

    fn hero_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let badge = container(
            row![
                bootstrap::star_fill().size(12).style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
                text(hero::BADGE).size(13),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding([6, 14])
        .style(badge_style(pal));

        let title = column![
            text(hero::TITLE_TOP)
                .size(54)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
            text(hero::TITLE_BOTTOM).size(54),
        ]
        .align_x(Alignment::Center);

        let subline = container(text(hero::SUBLINE).size(17).style(move |_| {
            iced::widget::text::Style {
                color: Some(pal.muted),
            }
        }))
        .max_width(620);

        let ctas = row![
            button(
                row![
                    bootstrap::rocket_takeoff().size(15),
                    text(hero::CTA_PRIMARY).size(15)
                ]
                .spacing(8)
                .align_y(Alignment::Center)
            )
            .on_press(Message::OpenTicket)
            .padding([12, 24])
            .style(primary_button_style(pal)),
            button(text(hero::CTA_SECONDARY).size(15))
                .on_press(Message::NavigateTo(Section::Worlds))
                .padding([12, 24])
                .style(ghost_button_style(pal)),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let mut stats = row![].spacing(16);
        for stat in HERO_STATS {
            stats = stats.push(
                container(
                    column![
                        text(stat.number)
                            .size(28)
                            .style(move |_| iced::widget::text::Style {
                                color: Some(pal.accent)
                            }),
                        text(stat.label).size(13).style(move |_| {
                            iced::widget::text::Style {
                                color: Some(pal.muted),
                            }
                        }),
                    ]
                    .spacing(4)
                    .align_x(Alignment::Center),
                )
                .padding([16, 28])
                .style(card_style(pal)),
            );
        }

        self.section_shell(
            column![badge, title, subline, ctas, stats]
                .spacing(28)
                .align_x(Alignment::Center),
            Padding {
                top: 140.0,
                right: 24.0,
                bottom: 100.0,
                left: 24.0,
            },
        )
    }

    fn worlds_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let header = self.section_header(pal, headers::WORLDS_BADGE, headers::WORLDS_TITLE, None);

        let mut top = row![].spacing(20);
        let mut bottom = row![].spacing(20);
        for (index, world) in WORLDS.into_iter().enumerate() {
            let card = self.world_card(index, world, pal);
            if index < 2 {
                top = top.push(card);
            } else {
                bottom = bottom.push(card);
            }
        }
        let grid = column![top, bottom].spacing(20);

        self.section_shell(
            column![header, grid].spacing(40).align_x(Alignment::Center),
            Padding {
                top: 80.0,
                right: 24.0,
                bottom: 80.0,
                left: 24.0,
            },
        )
    }

    fn world_card(&self, index: usize, world: World, pal: PaletteColors) -> Element<'_, Message> {
        let accent = world_accent(index);
        let backdrop = Canvas::new(WorldCard::<Message>::new(&self.world_cards[index], accent, pal))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut features = column![].spacing(6);
        for feature in world.features {
            features = features.push(
                row![
                    bootstrap::check_lg().size(12).style(move |_| iced::widget::text::Style {
                        color: Some(accent)
                    }),
                    text(feature).size(13).style(move |_| iced::widget::text::Style {
                        color: Some(pal.muted)
                    }),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        let content = column![
            text(world.subtitle)
                .size(12)
                .style(move |_| iced::widget::text::Style { color: Some(accent) }),
            text(world.title).size(22),
            text(world.description).size(14).style(move |_| {
                iced::widget::text::Style {
                    color: Some(pal.muted),
                }
            }),
            Space::new().height(Length::Fill),
            features,
        ]
        .spacing(10)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill);

        mouse_area(
            stack(vec![backdrop.into(), content.into()])
                .width(Length::Fill)
                .height(Length::Fixed(WORLD_CARD_HEIGHT)),
        )
        .on_enter(Message::WorldEntered(index))
        .on_move(move |position| Message::WorldMoved(index, position))
        .on_exit(Message::WorldExited(index))
        .into()
    }

    fn testimonials_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let header = self.section_header(
            pal,
            headers::TESTIMONIALS_BADGE,
            headers::TESTIMONIALS_TITLE,
            Some(headers::TESTIMONIALS_SUBLINE),
        );

        let current = &TESTIMONIALS[self.carousel.active];
        let fade = self.carousel.fade();

        let mut rating = row![].spacing(4);
        for _ in 0..5 {
            rating = rating.push(bootstrap::star_fill().size(14).style(move |_| {
                iced::widget::text::Style {
                    color: Some(Color {
                        a: fade,
                        ..pal.accent
                    }),
                }
            }));
        }

        let card = container(
            column![
                rating,
                text(format!("\u{201C}{}\u{201D}", current.quote))
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(Color { a: fade, ..pal.text })
                    }),
                column![
                    text(current.name)
                        .size(15)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(Color {
                                a: fade,
                                ..pal.accent
                            })
                        }),
                    text(current.role).size(12).style(move |_| {
                        iced::widget::text::Style {
                            color: Some(Color {
                                a: fade,
                                ..pal.muted
                            }),
                        }
                    }),
                ]
                .spacing(2),
            ]
            .spacing(18),
        )
        .padding(32)
        .max_width(720)
        .width(Length::Fill)
        .style(card_style(pal));

        let mut dots = row![].spacing(8);
        for index in 0..TESTIMONIALS.len() {
            dots = dots.push(
                button(
                    Space::new()
                        .width(Length::Fixed(10.0))
                        .height(Length::Fixed(10.0)),
                )
                .padding(0)
                .on_press(Message::CarouselSelected(index))
                .style(carousel_dot_style(pal, index == self.carousel.active)),
            );
        }

        self.section_shell(
            column![header, card, dots].spacing(28).align_x(Alignment::Center),
            Padding {
                top: 80.0,
                right: 24.0,
                bottom: 80.0,
                left: 24.0,
            },
        )
    }

    fn faq_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let header = self.section_header(pal, headers::FAQ_BADGE, headers::FAQ_TITLE, None);

        let mut list = column![].spacing(12).max_width(760).width(Length::Fill);
        for (index, entry) in FAQS.iter().enumerate() {
            let open = self.faq.is_open(index);
            let chevron = if open {
                bootstrap::chevron_down()
            } else {
                bootstrap::chevron_right()
            };

            let question = button(
                row![
                    column![
                        text(entry.category).size(11).style(move |_| {
                            iced::widget::text::Style {
                                color: Some(pal.accent_soft),
                            }
                        }),
                        text(entry.question).size(15),
                    ]
                    .spacing(4),
                    Space::new().width(Length::Fill),
                    chevron.size(14),
                ]
                .align_y(Alignment::Center),
            )
            .on_press(Message::FaqToggled(index))
            .padding([14, 18])
            .width(Length::Fill)
            .style(faq_row_style(pal, open));

            let mut item = column![question];
            if open {
                let reveal = self.faq.progress();
                item = item.push(
                    container(text(entry.answer).size(14).style(move |_| {
                        iced::widget::text::Style {
                            color: Some(Color {
                                a: reveal,
                                ..pal.muted
                            }),
                        }
                    }))
                    .padding(Padding {
                        top: 12.0,
                        right: 18.0,
                        bottom: 4.0,
                        left: 18.0,
                    }),
                );
            }
            list = list.push(item);
        }

        let outro = column![
            text(headers::FAQ_OUTRO).size(14).style(move |_| {
                iced::widget::text::Style {
                    color: Some(pal.muted),
                }
            }),
            button(
                row![
                    bootstrap::whatsapp().size(15),
                    text(headers::FAQ_CTA).size(15)
                ]
                .spacing(8)
                .align_y(Alignment::Center)
            )
            .on_press(Message::LaunchUrl(contact::question_link()))
            .padding([12, 20])
            .style(fab_button_style(pal)),
        ]
        .spacing(14)
        .align_x(Alignment::Center);

        self.section_shell(
            column![header, list, outro].spacing(36).align_x(Alignment::Center),
            Padding {
                top: 80.0,
                right: 24.0,
                bottom: 80.0,
                left: 24.0,
            },
        )
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let intro = column![
            text(clinic::DOCTOR)
                .size(26)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
            text(clinic::TAGLINE).size(14).style(move |_| {
                iced::widget::text::Style {
                    color: Some(pal.muted),
                }
            }),
            text(clinic::BLURB).size(14),
        ]
        .spacing(8);

        let info_row = |icon: iced::widget::Text<'static>, lines: Vec<&'static str>| {
            let mut texts = column![].spacing(2);
            for line in lines {
                texts = texts.push(text(line).size(13).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }));
            }
            row![
                icon.size(14).style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
                texts,
            ]
            .spacing(12)
            .align_y(Alignment::Center)
        };

        let details = column![
            info_row(
                bootstrap::geo_alt_fill(),
                vec![clinic::ADDRESS_VENUE, clinic::ADDRESS_DETAIL],
            ),
            info_row(
                bootstrap::telephone_fill(),
                vec![contact::CLINIC_PHONE_DISPLAY],
            ),
            info_row(bootstrap::envelope_fill(), vec![clinic::EMAIL]),
            info_row(
                bootstrap::clock(),
                vec![clinic::HOURS_WEEK, clinic::HOURS_SAT],
            ),
        ]
        .spacing(14);

        let actions = row![
            button(
                row![
                    bootstrap::whatsapp().size(15),
                    text("Agendar pelo WhatsApp").size(15)
                ]
                .spacing(8)
                .align_y(Alignment::Center)
            )
            .on_press(Message::LaunchUrl(contact::fab_link()))
            .padding([12, 20])
            .style(fab_button_style(pal)),
            button(text("Ver no mapa").size(15))
                .on_press(Message::LaunchUrl(contact::maps_link()))
                .padding([12, 20])
                .style(ghost_button_style(pal)),
        ]
        .spacing(16);

        let card = container(column![intro, details, actions].spacing(24))
            .padding(32)
            .max_width(760)
            .width(Length::Fill)
            .style(card_style(pal));

        self.section_shell(
            column![card].align_x(Alignment::Center),
            Padding {
                top: 80.0,
                right: 24.0,
                bottom: 80.0,
                left: 24.0,
            },
        )
    }

    fn footer(&self, pal: PaletteColors) -> Element<'_, Message> {
        let brand = row![
            bootstrap::stars().size(16).style(move |_| iced::widget::text::Style {
                color: Some(pal.accent)
            }),
            text("Reino Mágico de Sorrisos").size(15),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(
            column![
                brand,
                text("Dra. Michelle Amorim · Todos os direitos reservados").size(12),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        )
        .padding([28, 24])
        .width(Length::Fill)
        .style(footer_style(pal))
        .into()
    }

    /// Centers a section body and caps its width.
    fn section_shell(
        &self,
        body: iced::widget::Column<'_, Message>,
        padding: Padding,
    ) -> Element<'_, Message> {
        container(body.max_width(CONTENT_MAX_WIDTH).width(Length::Fill))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(padding)
            .into()
    }

    fn section_header(
        &self,
        pal: PaletteColors,
        badge: &'static str,
        title: &'static str,
        subline: Option<&'static str>,
    ) -> Element<'_, Message> {
        let mut header = column![
            container(text(badge).size(12))
                .padding([5, 12])
                .style(badge_style(pal)),
            text(title).size(34),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        if let Some(subline) = subline {
            header = header.push(
                container(text(subline).size(14).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }))
                .max_width(560),
            );
        }

        header.into()
    }

    fn floating_buttons(&self, pal: PaletteColors) -> Element<'_, Message> {
        let whatsapp = button(bootstrap::whatsapp().size(22))
            .on_press(Message::LaunchUrl(contact::fab_link()))
            .padding(16)
            .style(fab_button_style(pal));

        let sound_on = self.settings.sound_enabled;
        let speaker = if sound_on {
            bootstrap::volume_up_fill()
        } else {
            bootstrap::volume_mute_fill()
        };
        let sound_toggle = button(speaker.size(18))
            .on_press(Message::ToggleSound)
            .padding(14)
            .style(icon_button_style(pal, sound_on));

        container(
            row![
                sound_toggle,
                Space::new().width(Length::Fill),
                whatsapp,
            ]
            .align_y(Alignment::Center)
            .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
    }

    fn ticket_overlay(&self, pal: PaletteColors, progress: f32) -> Element<'_, Message> {
        let backdrop = mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(backdrop_style(pal)),
        )
        .on_press(Message::CloseTicket);

        let heading = row![
            container(text(ticket::BADGE).size(11))
                .padding([4, 10])
                .style(badge_style(pal)),
            Space::new().width(Length::Fill),
            button(bootstrap::x_lg().size(14))
                .on_press(Message::CloseTicket)
                .padding(6)
                .style(nav_link_style(pal, false)),
        ]
        .align_y(Alignment::Center);

        let panel = container(
            row![
                column![
                    text(ticket::DESTINATION_LABEL).size(10).style(move |_| {
                        iced::widget::text::Style {
                            color: Some(pal.muted),
                        }
                    }),
                    text(ticket::DESTINATION).size(14),
                ]
                .spacing(4)
                .width(Length::Fill),
                column![
                    text(ticket::DATE_LABEL).size(10).style(move |_| {
                        iced::widget::text::Style {
                            color: Some(pal.muted),
                        }
                    }),
                    text(ticket::DATE).size(14),
                ]
                .spacing(4),
            ]
            .align_y(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill)
        .style(ticket_panel_style(pal));

        let card = container(
            column![
                heading,
                bootstrap::rocket_takeoff()
                    .size(40)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent)
                    }),
                text(ticket::TITLE).size(24),
                text(ticket::SUBTITLE).size(14).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }),
                panel,
                text(ticket::HINT).size(12).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }),
                button(
                    row![
                        bootstrap::whatsapp().size(15),
                        text(ticket::CONFIRM).size(14)
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center)
                )
                .on_press(Message::ConfirmTicket)
                .padding([12, 20])
                .style(primary_button_style(pal)),
                text(ticket::FOOTNOTE).size(11).style(move |_| {
                    iced::widget::text::Style {
                        color: Some(pal.muted),
                    }
                }),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding(28)
        // Scale in with the spring
        .width(Length::Fixed(MODAL_WIDTH * (0.9 + 0.1 * progress)))
        .style(modal_card_style(pal));

        stack(vec![
            backdrop.into(),
            container(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into(),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn loading_overlay(&self, pal: PaletteColors) -> Element<'_, Message> {
        let opacity = self.loading.opacity;
        let percent = self.loading.progress.percent();

        let mut body = column![
            bootstrap::stars().size(44).style(move |_| iced::widget::text::Style {
                color: Some(Color {
                    a: opacity,
                    ..pal.accent
                })
            }),
            text("Reino Mágico de Sorrisos").size(28),
            text(self.loading.progress.phase().message()).size(15).style(move |_| {
                iced::widget::text::Style {
                    color: Some(Color {
                        a: opacity,
                        ..pal.muted
                    }),
                }
            }),
            progress_bar(0.0..=100.0, percent)
                .length(Length::Fixed(320.0))
                .girth(8)
                .style(move |_| iced::widget::progress_bar::Style {
                    background: iced::Background::Color(Color {
                        a: 0.3 * opacity,
                        ..pal.surface_raised
                    }),
                    bar: iced::Background::Color(Color {
                        a: opacity,
                        ..pal.accent
                    }),
                    border: iced::Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 4.0.into(),
                    },
                }),
            text(format!("{percent:.0}%")).size(14),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        if !self.loading.progress.is_complete() {
            body = body.push(
                button(text("Pular").size(13))
                    .on_press(Message::SkipLoading)
                    .padding([8, 18])
                    .style(ghost_button_style(pal)),
            );
        }

        let veil = container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(loading_veil_style(pal, opacity));

        // The veil swallows presses so nothing underneath is clickable
        // while it shows; a tap anywhere skips the countdown.
        mouse_area(veil).on_press(Message::SkipLoading).into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let body = column![
            text("Não foi possível iniciar o Reino")
                .size(22)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.danger)
                }),
            container(
                scrollable(text(error).size(12).font(iced::Font::MONOSPACE))
                    .height(Length::Fixed(160.0))
            )
            .padding(16)
            .style(card_style(pal)),
            button(text("Fechar").size(14))
                .on_press(Message::CloseRequested)
                .padding([10, 24])
                .style(primary_button_style(pal)),
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .max_width(520);

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

/// Scrollable ID for the section page, used by the snap-to navigation.
fn scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("reino-sections")
}

/// Relative scroll target for each navigation section.
fn section_offset(section: Section) -> f32 {
    match section {
        Section::Hero => 0.0,
        Section::Worlds => 0.22,
        Section::Testimonials => 0.52,
        Section::Faq => 0.70,
        Section::Contact => 1.0,
    }
}

/// Section considered active for a relative scroll offset.
fn section_at(offset: f32) -> Section {
    if offset < 0.12 {
        Section::Hero
    } else if offset < 0.42 {
        Section::Worlds
    } else if offset < 0.62 {
        Section::Testimonials
    } else if offset < 0.86 {
        Section::Faq
    } else {
        Section::Contact
    }
}

fn on_window_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        // Cursor moves come from here rather than a mouse_area so the
        // parallax keeps tracking over widgets that capture the event.
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::Focused) => Some(Message::FocusChanged(true)),
        Event::Window(window::Event::Unfocused) => Some(Message::FocusChanged(false)),
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
        _ => None,
    }
}

fn main() -> iced::Result {
    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    iced::application(App::init, App::update, App::view)
        .title("Reino Mágico de Sorrisos")
        .subscription(App::subscription)
        .theme(get_theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            min_size: Some(Size::new(800.0, 600.0)),
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run()
}
