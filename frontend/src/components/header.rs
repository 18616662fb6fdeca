use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub on_toggle_dark_mode: Callback<()>,
    pub on_download_pdf: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_download = {
        let on_download_pdf = props.on_download_pdf.clone();
        Callback::from(move |_: MouseEvent| {
            on_download_pdf.emit(());
        })
    };

    let on_toggle = {
        let on_toggle_dark_mode = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_dark_mode.emit(());
        })
    };

    html! {
        <header class="header">
            <h1 class="app-title">{"Expenso"}</h1>
            <div class="header-actions">
                <button class="btn btn-download" onclick={on_download}>
                    {"📄 Download PDF"}
                </button>
                <button class="btn btn-mode" onclick={on_toggle}>
                    {if props.dark_mode { "☀️ Light Mode" } else { "🌙 Dark Mode" }}
                </button>
            </div>
        </header>
    }
}
