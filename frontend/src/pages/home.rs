use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::accordion::{Accordion, AccordionAction};
use crate::components::{
    drawer::DrawerMenu,
    fade_in::FadeIn,
    footer::Footer,
    loading_screen::LoadingScreen,
    logo::{LogoSize, MetallicLogo},
    nav::Navigation,
    section::Section,
};
use crate::config::{self, LOADING_DELAY_MS, SCROLL_THRESHOLD};
use crate::content::SiteContent;
use crate::loading::use_loading;
use crate::pages::services::ServiceList;
use crate::pages::transformation::TransformationSection;
use crate::scroll_flag::use_scrolled;
use crate::scroll_lock::use_scroll_lock;

#[function_component]
pub fn Home() -> Html {
    let content = use_memo(
        |_| {
            SiteContent::load().unwrap_or_else(|e| {
                error!("Failed to load site content: {}", e);
                SiteContent::default()
            })
        },
        (),
    );
    let loading = use_loading(LOADING_DELAY_MS);
    let menu_open = use_bool_toggle(false);
    let scrolled = use_scrolled(SCROLL_THRESHOLD);
    let open_service = use_reducer(Accordion::<String>::default);

    use_scroll_lock(*menu_open);

    if loading {
        return html! { <LoadingScreen /> };
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            info!("Menu toggled");
            menu_open.toggle();
        })
    };

    let toggle_service = {
        let open_service = open_service.clone();
        Callback::from(move |id: String| open_service.dispatch(AccordionAction::Toggle(id)))
    };

    html! {
        <div class="page">
            <Navigation is_open={*menu_open} is_scrolled={scrolled} on_toggle={toggle_menu.clone()} />
            <DrawerMenu is_open={*menu_open} on_toggle={toggle_menu} items={content.drawer.clone()} />

            // Hero
            <header id="top" class="hero">
                <FadeIn delay={200}>
                    <MetallicLogo size={LogoSize::Xl} />
                </FadeIn>

                <FadeIn delay={1000} class={classes!("hero-copy")}>
                    <h2 class="hero-lines">
                        <span class="mobile-only stacked">
                            <span class="strong">{"「変わりたい」"}</span>
                            <span>{"そう感じた、その瞬間から。"}</span>
                            <span class="strong">{"小さな決断を、"}<br />{"未来の自信に。"}</span>
                            <span>{"私たちは、あなたと共に"}<br /><span class="strong">{"「なりたい」"}</span>{"を叶えます。"}</span>
                        </span>
                        <span class="desktop-only">
                            {"「変わりたい」そう感じた、その瞬間から。"}
                            <br />
                            {"小さな決断を、未来の自信に。"}
                            <br />
                            {"私たちは、あなたと共に「なりたい」を叶えます。"}
                        </span>
                    </h2>
                    <p class="hero-tagline">{"From a single decision to your future."}</p>
                </FadeIn>

                <div class="scroll-hint" aria-hidden="true">{"↓"}</div>
            </header>

            // Philosophy
            <Section id="philosophy" class={classes!("philosophy")}>
                <div class="philosophy-grid">
                    <div class="philosophy-col left">
                        <FadeIn>
                            <h3 class="big-number">{"01"}<span class="text-metallic">{"Moment"}</span></h3>
                        </FadeIn>
                        <FadeIn delay={200}>
                            <h4>{"決断の一瞬"}</h4>
                            <p>
                                {"あなたの人生が動き出す、"}<br />
                                {"その瞬間。"}<br />
                                {"「変わりたい」と心が動いた、あの一瞬。"}
                            </p>
                        </FadeIn>
                    </div>

                    <div class="philosophy-col right">
                        <FadeIn>
                            <h3 class="big-number">{"02"}<span class="text-metallic">{"Entry"}</span></h3>
                        </FadeIn>
                        <FadeIn delay={200}>
                            <h4>{"未来への入口"}</h4>
                            <p>
                                {"その想いを、"}<br />
                                {"行動に変える入口。"}<br />
                                {"新しい自分へ踏み出すための、"}<br />
                                {"最初の一歩。"}
                            </p>
                        </FadeIn>
                    </div>
                </div>
            </Section>

            <div class="company-link">
                <a href={config::COMPANY_DETAILS_URL} target="_blank" rel="noopener noreferrer">
                    {"会社詳細を見る"}
                    <span class="arrow">{"→"}</span>
                </a>
            </div>

            // Catchphrase
            <section class="catchphrase">
                <FadeIn>
                    <p class="quote text-metallic">{"\"One decision can "}<br />{" change everything.\""}</p>
                    <p class="quote-ja">{"その小さな決断が、"}<br class="mobile-only" />{"あなたの未来を大きく動かす。"}</p>
                    <p class="quote-sub pre-line">{"夢を追う側から、\n憧れを与える存在へ。"}</p>
                    <div class="quote-rule"></div>
                    <p class="quote-foot">{"Your emotional turning point starts here."}</p>
                </FadeIn>
            </section>

            // Services
            <Section id="services">
                <div class="section-heading">
                    <span class="eyebrow">{"OUR EXPERTISE"}</span>
                    <h2>
                        <span>{"Services"}</span>
                        <span class="heading-ja">{"サービス"}</span>
                    </h2>
                </div>
                <ServiceList
                    services={content.services.clone()}
                    open={open_service.open().cloned()}
                    on_toggle={toggle_service}
                />
            </Section>

            <TransformationSection rows={content.transformation.clone()} />

            // Contact
            <Section id="contact" class={classes!("contact")}>
                <div class="contact-panel">
                    <div class="contact-glow"></div>
                    <div class="contact-row">
                        <div>
                            <h2 class="contact-title">{"Start Your Moment"}</h2>
                            <p class="contact-sub">{"未来の確かな舞台へ。"}</p>
                        </div>
                        <a href={config::CONTACT_URL} target="_blank" rel="noopener noreferrer" class="contact-button">
                            <span>{"CONTACT US"}</span>
                            <span class="contact-button-ja">{"お問い合わせ"}</span>
                        </a>
                    </div>
                </div>
            </Section>

            <Footer links={content.footer.clone()} />
        </div>
    }
}
