//! Country spelling lookup table.
//!
//! Maps locale-specific, abbreviated and multilingual spellings to one
//! canonical English country name. A `None` target means the spelling carries
//! no country and is removed from the list. Entries are kept in their
//! historical order, duplicates included; when a key repeats, the last entry
//! wins (see [`super::countries::canonical_country`]).

pub(crate) static COUNTRY_ALIASES: &[(&str, Option<&str>)] = &[
    ("åland", Some("finland")),
    ("european-union", Some("europe")),
    ("cap-vert", Some("cape verde")),
    ("república de china", Some("china")),
    ("sudán", Some("sudan")),
    ("scotland", Some("united kingdom")),
    ("nueva zelanda", Some("new zealand")),
    ("libye", Some("libya")),
    ("великобритания", Some("united kingdom")),
    ("رومانيا", Some("romania")),
    ("burundi", Some("burundi")),
    ("galmudug", Some("somalia")),
    ("østrig", Some("austria")),
    ("holland", Some("netherlands")),
    ("libya", Some("libya")),
    ("bahrain", Some("bahrain")),
    ("islanda", Some("iceland")),
    ("belgica", Some("belgium")),
    ("irsko", Some("ireland")),
    ("βουλγαρία", Some("bulgaria")),
    ("гърция", Some("greece")),
    ("islandia", Some("iceland")),
    ("olanda", Some("netherlands")),
    ("worldwide", Some("world")),
    ("malawi", Some("malawi")),
    ("bénin", Some("benin")),
    ("shqipëria", Some("albania")),
    ("republic-of-macedonia", Some("north macedonia")),
    ("северна македония", Some("north macedonia")),
    ("албания", Some("albania")),
    ("белгија", Some("belgium")),
    ("democratic-republic-of-the-congo", Some("democratic republic of the congo")),
    ("ghana", Some("ghana")),
    ("europese unie", Some("europe")),
    ("volksrepubliek china", Some("china")),
    ("united-arab-emirates", Some("united arab emirates")),
    ("arménia", Some("armenia")),
    ("norvegia", Some("norway")),
    ("nový zéland", Some("new zealand")),
    ("portugali", Some("portugal")),
    ("albânia", Some("albania")),
    ("ierland", Some("ireland")),
    ("poľsko", Some("poland")),
    ("nyderlandai", Some("netherlands")),
    ("central african republic", Some("central african republic")),
    ("algieria", Some("algeria")),
    ("bośnia i hercegowina", Some("bosnia and herzegovina")),
    ("chorwacja", Some("croatia")),
    ("rosja", Some("russia")),
    ("benin", Some("benin")),
    ("spanish", Some("spain")),
    ("fr", Some("france")),
    ("people's republic of china", Some("china")),
    ("es", Some("spain")),
    ("america", Some("united states")),
    ("ca", Some("canada")),
    ("be", Some("belgium")),
    ("iraqi kurdistan", Some("irak")),
    ("turks and caicos islands", Some("turkey")),
    ("indian subcontinent", Some("india")),
    ("san marino", Some("italy")),
    ("sicily", Some("italy")),
    ("all countries", Some("world")),
    ("vatican city", Some("italy")),
    ("sudáfrica", Some("south africa")),
    ("áfrica do sul", Some("south africa")),
    ("benín", Some("benin")),
    ("belçika", Some("belgium")),
    ("i̇sviçre", Some("switzerland")),
    ("кот д'ивоар", Some("ivory coast")),
    ("кувейт", Some("kuwait")),
    ("люксембург", Some("luxembourg")),
    ("paquistão", Some("pakistan")),
    ("gibraltar", Some("united kingdom")),
    ("iraque", Some("iraq")),
    ("nemčija", Some("germany")),
    ("grčija", Some("greece")),
    ("luksemburg", Some("luxembourg")),
    ("španija", Some("spain")),
    ("monténégro", Some("montenegro")),
    ("kenya", Some("kenya")),
    ("portugalia", Some("portugal")),
    ("azerbaïdjan", Some("azerbaijan")),
    ("malte", Some("malta")),
    ("kroatia", Some("croatia")),
    ("sveits", Some("switzerland")),
    ("guinea", Some("united states")),
    ("հայաստան", Some("armenia")),
    ("estonsko", Some("estonia")),
    ("kuwejt", Some("kuwait")),
    ("bulgaaria", Some("bulgaria")),
    ("rumeenia", Some("romania")),
    ("словенија", Some("slovenia")),
    ("thajsko", Some("thailand")),
    ("สาธารณรัฐเช็ก", Some("czech republic")),
    ("ประเทศสโลวาเกีย", Some("slovakia")),
    ("мађарска", Some("hungary")),
    ("namibia", Some("namibia")),
    ("niger", Some("niger")),
    ("namibie", Some("namibia")),
    ("sudafrica", Some("south africa")),
    ("botswana", Some("botswana")),
    ("tanzania", Some("tanzania")),
    ("algerie", Some("algeria")),
    ("republic of the congo", Some("republic of the congo")),
    ("république centrafricaine", Some("central african republic")),
    ("guinée équatoriale", Some("united states")),
    ("wybrzeże kości słoniowej", Some("ivory coast")),
    ("costa d'avorio", Some("ivory coast")),
    ("tunezja", Some("tunisia")),
    ("tunesië", Some("tunisia")),
    ("brunei", Some("brunei")),
    ("مصر", Some("egypt")),
    ("ایالات متحده آمریکا", Some("united states")),
    ("soomaaliya", Some("somalia")),
    ("katar", Some("qatar")),
    ("سوريا", Some("syria")),
    ("اليمن", Some("yemen")),
    ("yemen", Some("yemen")),
    ("venäjä", Some("russia")),
    ("finsko", Some("finland")),
    ("viro", Some("estonia")),
    ("salvador", Some("el salvador")),
    ("英国", Some("united kingdom")),
    ("turquía", Some("turkey")),
    ("bosnia y herzegovina", Some("bosnia and herzegovina")),
    ("bósnia e herzegovina", Some("bosnia and herzegovina")),
    ("turquia", Some("turkey")),
    ("irlanti", Some("ireland")),
    ("ruoŧŧa", Some("sweden")),
    ("sri-lanka", Some("sri lanka")),
    ("se", Some("sweden")),
    ("an fhraing", Some("france")),
    ("a' ghearmailt", Some("germany")),
    ("poblachd na h-èireann", Some("ireland")),
    ("an rìoghachd aonaichte", Some("united kingdom")),
    ("dominican-republic", Some("dominican republic")),
    ("messico", Some("mexico")),
    ("indien", Some("india")),
    ("benelux", Some("benelux")),
    ("new-zealand", Some("new zealand")),
    ("فرانس", Some("france")),
    ("جمہوریہ آئرستان", Some("ireland")),
    ("پاکستان", Some("pakistan")),
    ("ریاستہائے متحدہ آمریکا", Some("united states")),
    ("република македонија", Some("north macedonia")),
    ("la-reunion", Some("reunion")),
    ("portugalsko", Some("portugal")),
    ("kolumbien", Some("colombia")),
    ("mauritania", Some("mauritania")),
    ("isle of man", Some("united kingdom")),
    ("haití", Some("haiti")),
    ("cile", Some("chile")),
    ("équateur", Some("ecuador")),
    ("brasilien", Some("brazil")),
    ("br", Some("brazil")),
    ("írán", Some("iran")),
    ("צרפת", Some("france")),
    ("איטליה", Some("italy")),
    ("principato di monaco", Some("monaco")),
    ("repubblica ceca", Some("czech republic")),
    ("letónia", Some("latvia")),
    ("guadalupa", Some("reunion")),
    ("cipro", Some("cyprus")),
    ("macedonia del norte", Some("north macedonia")),
    ("finska", Some("finland")),
    ("algerije", Some("algeria")),
    ("spanyolország", Some("hungary")),
    ("dánmárku", Some("denmark")),
    ("βέλγιο", Some("belgium")),
    ("guiana francesa", Some("french guiana")),
    ("polinésia francesa", Some("french polynesia")),
    ("jordânia", Some("jordan")),
    ("north korea", Some("north korea")),
    ("ประเทศจีน", Some("china")),
    ("islândia", Some("iceland")),
    ("zuid-afrika", Some("south africa")),
    ("letonia", Some("latvia")),
    ("república democrática del congo", Some("democratic republic of the congo")),
    ("santoña", Some("spain")),
    ("cantabria", Some("spain")),
    ("france spain", Some("france")),
    ("costa do marfim", Some("ivory coast")),
    ("túnez", Some("tunisia")),
    ("португалия", Some("portugal")),
    ("tunesien", Some("tunisia")),
    ("угорщина", Some("hungary")),
    ("італія", Some("italy")),
    ("іспанія", Some("spain")),
    ("марокко", Some("morocco")),
    ("mónaco", Some("monaco")),
    ("jordania", Some("jordan")),
    ("cabo verde", Some("cape verde")),
    ("franca", Some("france")),
    ("ισπανία", Some("spain")),
    ("arábia saudita", Some("saudi arabia")),
    ("andora", Some("andorra")),
    ("maldives", Some("maldives")),
    ("tunisko", Some("tunisia")),
    ("martinik", Some("martinique")),
    ("bosnia-and-herzegovina", Some("bosnia and herzegovina")),
    ("швајцарска", Some("switzerland")),
    ("bosnie-herzégovine", Some("bosnia and herzegovina")),
    ("кипар", Some("cyprus")),
    ("türkei", Some("turkey")),
    ("تركيا", Some("turkey")),
    ("amerika birleşik devletleri", Some("united states")),
    ("řecko", Some("greece")),
    ("royaume uni", Some("united kingdom")),
    ("cz", Some("czech republic")),
    ("singapura", Some("singapore")),
    ("frankriika", Some("france")),
    ("nuova zelanda", Some("new zealand")),
    ("kroatië", Some("croatia")),
    ("elfenbeinküste", Some("ivory coast")),
    ("philippinen", Some("philippines")),
    ("palestinian territories", Some("palestine")),
    ("índia", Some("india")),
    ("nova caledónia", Some("australia")),
    ("moldavsko", Some("moldova")),
    ("slovinsko", Some("slovenia")),
    ("프랑스", Some("france")),
    ("독일", Some("germany")),
    ("filipini", Some("philippines")),
    ("južna koreja", Some("south korea")),
    ("zuid-korea", Some("south korea")),
    ("corea del sud", Some("south korea")),
    ("캐나다", Some("canada")),
    ("네덜란드", Some("netherlands")),
    ("tšekki", Some("czech republic")),
    ("cambogia", Some("cambodia")),
    ("saudi-arabia", Some("saudi arabia")),
    ("laos", Some("laos")),
    ("соединённые штаты америки", Some("united states")),
    ("ประเทศกัมพูชา", Some("cambodia")),
    ("kamerun", Some("cameroon")),
    ("ประเทศอินโดนีเซีย", Some("indonesia")),
    ("timor-leste", Some("timor-leste")),
    ("wereld", Some("world")),
    ("fiji", Some("fiji")),
    ("ประเทศแคนาดา", Some("canada")),
    ("ประเทศสิงคโปร์", Some("singapore")),
    ("bangladés", Some("bangladesh")),
    ("nepal", Some("nepal")),
    ("pháp", Some("france")),
    ("việt nam", Some("vietnam")),
    ("irán", Some("iran")),
    ("kirgisistan", Some("kyrgyzstan")),
    ("bosnien und herzegowina", Some("bosnia and herzegovina")),
    ("albánie", Some("albania")),
    ("francia", Some("france")),
    ("bosna a hercegovina", Some("bosnia and herzegovina")),
    ("saúdská arábie", Some("saudi arabia")),
    ("evropska unija", Some("europe")),
    ("澳大利亚", Some("australia")),
    ("wallis and futuna", Some("wallis and futuna")),
    ("البحرين", Some("bahrain")),
    ("cook islands", Some("cook islands")),
    ("fidji", Some("fiji")),
    ("malaisie", Some("malaysia")),
    ("anguilla", Some("anguilla")),
    ("montserrat", Some("montserrat")),
    ("габон", Some("gabon")),
    ("almanya", Some("germany")),
    ("スイス", Some("switzerland")),
    ("فرانسه", Some("france")),
    ("ایران", Some("iran")),
    ("baréin", Some("bahrain")),
    ("fas", Some("morocco")),
    ("népal", Some("nepal")),
    ("ประเทศโกตดิวัวร์", Some("ivory coast")),
    ("saint lucia", Some("saint lucia")),
    ("regatul unit al marii britanii și al irlandei de nord", Some("united kingdom")),
    ("somalia", Some("somalia")),
    ("rwanda", Some("rwanda")),
    ("sierra leone", Some("sierra leone")),
    ("nijer", Some("niger")),
    ("brasile", Some("brazil")),
    ("cehia", Some("czech republic")),
    ("slovacia", Some("slovakia")),
    ("ue", Some("europe")),
    ("demokratická republika kongo", Some("democratic republic of the congo")),
    ("nova kaledonien", Some("australia")),
    ("jugoslavija", Some("yugoslavia")),
    ("canadà", Some("canada")),
    ("turcia", Some("turkey")),
    ("polynésie francaise", Some("french polynesia")),
    ("бельгія", Some("belgium")),
    ("francjia", Some("france")),
    ("antigua and barbuda", Some("antigua and barbuda")),
    ("trinidad y tobago", Some("trinidad and tobago")),
    ("republic of ireland", Some("ireland")),
    ("frantsa", Some("france")),
    ("γουαδελούπη", Some("reunion")),
    ("كوت ديفوار", Some("ivory coast")),
    ("cina", Some("china")),
    ("statele unite ale americii", Some("united states")),
    ("hu", Some("hungary")),
    ("словения", Some("slovenia")),
    ("nieuw-caledonië", Some("australia")),
    ("algéria", Some("algeria")),
    ("marokkó", Some("morocco")),
    ("république de macédoine", Some("north macedonia")),
    ("macao", Some("macau")),
    ("греция", Some("greece")),
    ("lesotho", Some("lesotho")),
    ("libanon", Some("lebanon")),
    ("palästinensische autonomiegebiete", Some("palestine")),
    ("vereinigte arabische emirate", Some("united arab emirates")),
    ("dz", Some("algeria")),
    ("pf", Some("french polynesia")),
    ("bg", Some("bulgaria")),
    ("mo", Some("macau")),
    ("sa", Some("saudi arabia")),
    ("gn", Some("united states")),
    ("ve", Some("venezuela")),
    ("pe", Some("peru")),
    ("th", Some("thailand")),
    ("cl", Some("chile")),
    ("nz", Some("new zealand")),
    ("in", Some("india")),
    ("au", Some("australia")),
    ("id", Some("indonesia")),
    ("gr", Some("greece")),
    ("co", Some("colombia")),
    ("ro", Some("romania")),
    ("hk", Some("hong kong")),
    ("rs", Some("serbia")),
    ("dk", Some("denmark")),
    ("ae", Some("united arab emirates")),
    ("sc", Some("seychelles")),
    ("middle east", Some("middle east")),
    ("kasachstan", Some("kazakhstan")),
    ("tn", Some("tunisia")),
    ("ci", Some("ivory coast")),
    ("kw", Some("kuwait")),
    ("pt", Some("portugal")),
    ("ar", Some("argentina")),
    ("tw", Some("taiwan")),
    ("ga", Some("gabon")),
    ("tg", Some("togo")),
    ("bh", Some("bahrain")),
    ("pk", Some("pakistan")),
    ("pa", Some("panama")),
    ("etats-unis", Some("united states")),
    ("mu", Some("mauritius")),
    ("faroe islands", Some("denmark")),
    ("ht", Some("haiti")),
    ("ドイツ", Some("germany")),
    ("za", Some("south africa")),
    ("fi", Some("finland")),
    ("litvánia", Some("lithuania")),
    ("ua", Some("ukraine")),
    ("il", Some("israel")),
    ("si", Some("slovenia")),
    ("sk", Some("slovakia")),
    ("south-africa", Some("south africa")),
    ("east-germany", Some("germany")),
    ("tr", Some("turkey")),
    ("pl", Some("poland")),
    ("mk", Some("north macedonia")),
    ("île maurice", Some("mauritius")),
    ("pr", Some("puerto rico")),
    ("ne", Some("niger")),
    ("cr", Some("costa rica")),
    ("my", Some("malaysia")),
    ("bj", Some("benin")),
    ("ec", Some("ecuador")),
    ("mt", Some("malta")),
    ("vn", Some("vietnam")),
    ("ba", Some("bosnia and herzegovina")),
    ("qa", Some("qatar")),
    ("by", Some("belarus")),
    ("gd", Some("grenada")),
    ("mx", Some("mexico")),
    ("eg", Some("egypt")),
    ("eu", Some("europe")),
    ("cm", Some("cameroon")),
    ("ng", Some("nigeria")),
    ("ml", Some("mali")),
    ("om", Some("oman")),
    ("gt", Some("guatemala")),
    ("grenada", Some("grenada")),
    ("thaimaa", Some("thailand")),
    ("lt", Some("lithuania")),
    ("mr", Some("mauritania")),
    ("papua new guinea", Some("united states")),
    ("białoruś", Some("belarus")),
    ("ph", Some("philippines")),
    ("itàlia", Some("italy")),
    ("u.s.a", Some("united states")),
    ("sv", Some("el salvador")),
    ("kz", Some("kazakhstan")),
    ("lv", Some("latvia")),
    ("cg", Some("congo")),
    ("arabia saudyjska", Some("saudi arabia")),
    ("turcja", Some("turkey")),
    ("saint martin", Some("france")),
    ("bf", Some("burkina faso")),
    ("bd", Some("bangladesh")),
    ("gh", Some("ghana")),
    ("mz", Some("mozambique")),
    ("al", Some("albania")),
    ("uz", Some("uzbekistan")),
    ("pm", Some("saint pierre and miquelon")),
    ("gy", Some("guyana")),
    ("dj", Some("djibouti")),
    ("uy", Some("uruguay")),
    ("cd", Some("democratic republic of the congo")),
    ("sowjetunion", Some("soviet union")),
    ("frantzia", Some("france")),
    ("espainia", Some("spain")),
    ("mg", Some("madagascar")),
    ("ke", Some("kenya")),
    ("uae", Some("united arab emirates")),
    ("td", Some("chad")),
    ("méxico españa", Some("mexico spain")),
    ("az", Some("azerbaijan")),
    ("norveška", Some("norway")),
    ("republik kongo", Some("republic of the congo")),
    ("np", Some("nepal")),
    ("gi", Some("gibraltar")),
    ("ad", Some("andorra")),
    ("yugoslavia", Some("serbia")),
    ("porto rico", Some("puerto rico")),
    ("czechia", Some("czech republic")),
    ("kr", Some("south korea")),
    ("md", Some("moldova")),
    ("ประเทศนิวซีแลนด์", Some("new zealand")),
    ("абхазия", Some("abkhazia")),
    ("zimbabwe", Some("zimbabwe")),
    ("mc", Some("monaco")),
    ("република ирландия", Some("republic of ireland")),
    ("lr", Some("liberia")),
    ("yt", Some("mayotte")),
    ("cy", Some("cyprus")),
    ("nowa kaledonia", Some("australia")),
    ("je", Some("jersey")),
    ("gg", Some("guernsey")),
    ("hashemite kingdom of jordan", Some("jordan")),
    ("lëtzebuerg (land)", Some("luxembourg")),
    ("santona", Some("saint")),
    ("هولندا", Some("netherlands")),
    ("congo", Some("congo")),
    ("ivory coast", Some("cote d'ivoire")),
    ("norsko", Some("norway")),
    ("lc", Some("saint lucia")),
    ("macedonia", Some("north macedonia")),
    ("emirados árabes unidos", Some("united arab emirates")),
    ("tajlandia", Some("thailand")),
    ("me", Some("montenegro")),
    ("america", Some("united states")),
    ("wf", Some("wallis and futuna")),
    ("do", Some("dominican republic")),
    ("united-states-of-america", Some("united states")),
    ("indonesië", Some("indonesia")),
    ("maleisië", Some("malaysia")),
    ("filipijnen", Some("philippines")),
    ("republika chińska", Some("china")),
    ("ge", Some("georgia")),
    ("croazia", Some("croatia")),
    ("uniunea europeană", Some("europe")),
    ("evropská unie", Some("europe")),
    ("cape verde", Some("cape verde")),
    ("szlovénia", Some("slovenia")),
    ("++", Some("unknown")),
    ("kolumbia", Some("colombia")),
    ("タイ王国", Some("thailand")),
    ("grekland", Some("greece")),
    ("polinesia perancis", Some("french polynesia")),
    ("libano", Some("lebanon")),
    ("usbekistan", Some("uzbekistan")),
    ("tadschikistan", Some("tajikistan")),
    ("weißrussland", Some("belarus")),
    ("republic-of-the-congo", Some("republic of the congo")),
    ("ky", Some("cayman islands")),
    ("republic of lithuania", Some("lithuania")),
    ("توغو", Some("togo")),
    ("is", Some("iceland")),
    ("bhutan", Some("bhutan")),
    ("paraguai", Some("paraguay")),
    ("uruguai", Some("uruguay")),
    ("it:..", Some("italy")),
    ("am", Some("armenia")),
    ("荷蘭", Some("netherlands")),
    ("japāna", Some("japan")),
    ("japonija", Some("japan")),
    ("ir", Some("iran")),
    ("izrael", Some("israel")),
    ("py", Some("paraguay")),
    ("cu", Some("cuba")),
    ("yu", Some("serbia")),
    ("ประเทศตุรกี", Some("turkey")),
    ("netherlands france", Some("france")),
    ("ägypten", Some("egypt")),
    ("lk", Some("sri lanka")),
    ("турция", Some("turkey")),
    ("palestine", Some("palestine")),
    ("wyspy owcze", Some("faroe islands")),
    ("остров рождества", Some("christmas island")),
    ("hr", Some("croatia")),
    ("état unis", Some("united states")),
    ("jo", Some("jordan")),
    ("iq", Some("iraq")),
    ("ni", Some("nicaragua")),
    ("パキスタン", Some("pakistan")),
    ("中国", Some("china")),
    ("american samoa", Some("american samoa")),
    ("mm", Some("myanmar")),
    ("cv", Some("cape verde")),
    ("словакия", Some("slovakia")),
    ("km", Some("comoros")),
    ("syrie", Some("syria")),
    ("kambodscha", Some("cambodia")),
    ("la", Some("laos")),
    ("bn", Some("brunei")),
    ("south america", Some("south america")),
    ("turkije", Some("turkey")),
    ("surinam", Some("suriname")),
    ("ukrajina", Some("ukraine")),
    ("vu", Some("vanuatu")),
    ("filipinas", Some("philippines")),
    ("m", Some("unknown")),
    ("cypr", Some("cyprus")),
    ("république démocratique allemande", Some("german democratic republic")),
    ("tunis", Some("tunisia")),
    ("естония", Some("estonia")),
    ("storbritannia", Some("united kingdom")),
    ("tz", Some("tanzania")),
    ("cw", Some("curaçao")),
    ("bosnia", Some("bosnia and herzegovina")),
    ("thailandia", Some("thailand")),
    ("fo", Some("faroe islands")),
    ("lenkija", Some("poland")),
    ("ee", Some("estonia")),
    ("costa-rica", Some("costa rica")),
    ("republic of moldova", Some("moldova")),
    ("na", Some("namibia")),
    ("объединённые арабские эмираты", Some("united arab emirates")),
    ("unione europea", Some("europe")),
    ("beļģija", Some("belgium")),
    ("caribisch nederland", Some("caribbean netherlands")),
    ("south-korea", Some("south korea")),
    ("el-salvador", Some("el salvador")),
    ("spánia", Some("spain")),
    ("الكاميرون", Some("cameroon")),
    ("santa lucía", Some("saint lucia")),
    ("romanya", Some("romania")),
    ("i̇spanya", Some("spain")),
    ("reino-unido", Some("united kingdom")),
    ("curazao", Some("curaçao")),
    ("узбекистан", Some("uzbekistan")),
    ("guayana francesa", Some("french guiana")),
    ("mv", Some("maldives")),
    ("bosznia-hercegovina", Some("bosnia and herzegovina")),
    ("észtország", Some("estonia")),
    ("jm", Some("jamaica")),
    ("et", Some("ethiopia")),
    ("ao", Some("angola")),
    ("sint maarten", Some("sint maarten")),
    ("bulgarija", Some("bulgaria")),
    ("chad", Some("chad")),
    ("cezayir", Some("algeria")),
    ("suopma", Some("finland")),
    ("iraqi kurdistan", Some("iraq")),
    ("---", Some("unknown")),
    ("egipto", Some("egypt")),
    ("caribbean netherlands", Some("caribbean netherlands")),
    ("fr €", Some("france")),
    ("zambia", Some("zambia")),
    ("bs", Some("bahamas")),
    ("cf", Some("central african republic")),
    ("uganda", Some("uganda")),
    ("sr", Some("suriname")),
    ("gq", Some("united states")),
    ("guinea ecuatorial", Some("united states")),
    ("bb", Some("barbados")),
    ("西班牙", Some("spain")),
    ("san martín", Some("saint martin")),
    ("san vicente y las granadinas", Some("saint vincent and the grenadines")),
    ("sx", Some("sint maarten")),
    ("argentyna", Some("argentina")),
    ("ukraina", Some("ukraine")),
    ("san marino", Some("san marino")),
    ("arabia saudită", Some("saudi arabia")),
    ("polinesia francese", Some("french polynesia")),
    ("ประเทศเม็กซิโก", Some("mexico")),
    ("pobřeží slonoviny", Some("ivory coast")),
    ("spojené arabské emiráty", Some("united arab emirates")),
    ("gabun", Some("gabon")),
    ("österrike", Some("austria")),
    ("argentina - español", Some("argentina")),
    ("armenia - pyсский", Some("armenia")),
    ("aruba - español", Some("aruba")),
    ("asia pacific", Some("asia")),
    ("australia - english", Some("australia")),
    ("austria - deutsch", Some("austria")),
    ("azerbaijan - русский", Some("azerbaijan")),
    ("belarus - pyсский", Some("belarus")),
    ("belgium - français", Some("belgium")),
    ("belgium - nederlands", Some("belgium")),
    ("bolivia - español", Some("bolivia")),
    ("bosnia i hercegovina - bosnian", Some("bosnia and herzegovina")),
    ("botswana - english", Some("botswana")),
    ("brazil - português", Some("brazil")),
    ("bulgaria - български", Some("bulgaria")),
    ("cambodia - english", Some("cambodia")),
    ("cambodia - ភាសាខ្មែរ", Some("cambodia")),
    ("canada - english", Some("canada")),
    ("canada - français", Some("canada")),
    ("chile - español", Some("chile")),
    ("china - 中文", Some("china")),
    ("colombia - español", Some("colombia")),
    ("costa rica - español", Some("costa rica")),
    ("croatia - hrvatski", Some("croatia")),
    ("cyprus - ελληνικά", Some("cyprus")),
    ("czech republic - čeština", Some("czech republic")),
    ("denmark - dansk", Some("denmark")),
    ("ecuador - español", Some("ecuador")),
    ("el salvador - español", Some("el salvador")),
    ("estonia - eesti", Some("estonia")),
    ("europe", Some("europe")),
    ("finland - suomi", Some("finland")),
    ("france - français", Some("france")),
    ("georgia - ქართული", Some("georgia")),
    ("germany - deutsch", Some("germany")),
    ("ghana - english", Some("ghana")),
    ("greece - ελληνικά", Some("greece")),
    ("guatemala - español", Some("guatemala")),
    ("honduras - español", Some("honduras")),
    ("hong kong - 粵語", Some("hong kong")),
    ("hungary - magyar", Some("hungary")),
    ("iceland - íslenska", Some("iceland")),
    ("india - english", Some("india")),
    ("indonesia - bahasa indonesia", Some("indonesia")),
    ("ireland - english", Some("ireland")),
    ("israel - עברית", Some("israel")),
    ("italy - italiano", Some("italy")),
    ("jamaica - english", Some("jamaica")),
    ("japan - 日本語", Some("japan")),
    ("kazakhstan - pyсский", Some("kazakhstan")),
    ("korea - 한국어", Some("south korea")),
    ("kyrgyzstan - русский", Some("kyrgyzstan")),
    ("latvia - latviešu", Some("latvia")),
    ("lebanon - english", Some("lebanon")),
    ("lesotho - english", Some("lesotho")),
    ("lithuania - lietuvių", Some("lithuania")),
    ("macau - 中文", Some("macau")),
    ("malaysia - bahasa melayu", Some("malaysia")),
    ("malaysia - english", Some("malaysia")),
    ("malaysia - 中文", Some("malaysia")),
    ("mexico - español", Some("mexico")),
    ("middle east & africa", Some("middle east and africa")),
    ("moldova - român", Some("moldova")),
    ("mongolia - монгол хэл", Some("mongolia")),
    ("namibia - english", Some("namibia")),
    ("netherlands - nederlands", Some("netherlands")),
    ("new zealand - english", Some("new zealand")),
    ("nicaragua - español", Some("nicaragua")),
    ("north macedonia - македонски јазик", Some("north macedonia")),
    ("norway - norsk", Some("norway")),
    ("panamá - español", Some("panama")),
    ("paraguay - español", Some("paraguay")),
    ("perú - español", Some("peru")),
    ("philippines - english", Some("philippines")),
    ("poland - polski", Some("poland")),
    ("portugal - português", Some("portugal")),
    ("puerto rico - español", Some("puerto rico")),
    ("república dominicana - español", Some("dominican republic")),
    ("romania - română", Some("romania")),
    ("russia - русский", Some("russia")),
    ("serbia - srpski", Some("serbia")),
    ("singapore - english", Some("singapore")),
    ("slovak republic - slovenčina", Some("slovakia")),
    ("slovenia - slovene", Some("slovenia")),
    ("south africa -english", Some("south africa")),
    ("spain - español", Some("spain")),
    ("swaziland - english", Some("eswatini")),
    ("sweden - svenska", Some("sweden")),
    ("switzerland - deutsch", Some("switzerland")),
    ("switzerland - français", Some("switzerland")),
    ("taiwan - 中文", Some("taiwan")),
    ("thailand - ไทย", Some("thailand")),
    ("trinidad & tobago - english", Some("trinidad and tobago")),
    ("turkey - türkçe", Some("turkey")),
    ("ukraine - yкраї́нська", Some("ukraine")),
    ("united kingdom - english", Some("united kingdom")),
    ("united states - english", Some("united states")),
    ("united states - español", Some("united states")),
    ("uruguay - español", Some("uruguay")),
    ("venezuela - español", Some("venezuela")),
    ("vietnam - tiếng việt", Some("vietnam")),
    ("zambia - english", Some("zambia")),
    ("mongolei", Some("mongolia")),
    ("xk", Some("kosovo")),
    ("zentralafrikanische republik", Some("central african republic")),
    ("latinoamerica", Some("latin america")),
    ("bermuda", Some("bermuda")),
    ("zm", Some("zambia")),
    ("pakistán", Some("pakistan")),
    ("5018 rue harwood", Some("canada")),
    ("allemagne nazi", Some("germany")),
    ("шпанија", Some("spain")),
    ("london", Some("united kingdom")),
    ("slovenië", Some("slovenia")),
    ("bhoutan", Some("bhutan")),
    ("madagascar - toamasina", Some("madagascar")),
    ("madžarska", Some("hungary")),
    ("maurícia", Some("mauritius")),
    ("tailândia", Some("thailand")),
    ("ly", Some("libya")),
    ("ベルギー", Some("belgium")),
    ("camerún", Some("cameroon")),
    ("gambia", Some("gambia")),
    ("united states minor outlying islands", Some("united states")),
    ("írország", Some("ireland")),
    ("литва", Some("lithuania")),
    ("itävalta", Some("austria")),
    ("malasia", Some("malaysia")),
    ("birmanie", Some("myanmar")),
    ("camerun", Some("cameroon")),
    ("liberia", Some("liberia")),
    ("السنغال", Some("senegal")),
    ("bahamas", Some("bahamas")),
    ("américa", Some("america")),
    ("belleville wa", Some("united states")),
    ("kazachstan", Some("kazakhstan")),
    ("ps", Some("palestine")),
    ("tt", Some("trinidad and tobago")),
    ("ethiopia", Some("ethiopia")),
    ("الاتحاد الأوروبي", Some("europe")),
    ("ryssland", Some("russia")),
    ("îles cook", Some("cook islands")),
    ("fj", Some("fiji")),
    ("カナダ", Some("canada")),
    ("уједињено краљевство", Some("united kingdom")),
    ("サウジアラビア", Some("saudi arabia")),
    ("černá hora", Some("montenegro")),
    ("coreia do sul", Some("south korea")),
    ("chorvátsko", Some("croatia")),
    ("malezja", Some("malaysia")),
    ("либия", Some("libya")),
    ("liettua", Some("lithuania")),
    ("oroszország", Some("hungary")),
    ("lux", Some("luxembourg")),
    ("hn", Some("honduras")),
    ("libia", Some("libya")),
    ("brazylia", Some("brazil")),
    ("korean tasavalta", Some("south korea")),
    ("northern mariana islands", Some("united states")),
    ("puerto-rico", Some("united states")),
    ("ahvenanmaan maakunta", Some("aland islands")),
    ("moldávia", Some("moldova")),
    ("state of palestine", Some("palestine")),
    ("unknown", Some("unknown")),
    ("イタリア", Some("italy")),
    ("azərbaycan", Some("azerbaijan")),
    ("virgin-islands-of-the-united-states", Some("united states")),
    ("čekija", Some("czech republic")),
    ("suedia", Some("sweden")),
    ("guam", Some("united states")),
    ("bq", Some("bonaire")),
    ("france.", Some("france")),
    ("bm", Some("bermuda")),
    ("sudan", Some("sudan")),
    ("yémen", Some("yemen")),
    ("north-macedonia", Some("north macedonia")),
    ("belize", Some("belize")),
    ("モロッコ", Some("morocco")),
    ("egito", Some("egypt")),
    ("السودان", Some("sudan")),
    ("u.s.a.", Some("united states")),
    ("pw", Some("palau")),
    ("sambia", Some("zambia")),
    ("ameriketako estatu batuak", Some("united states")),
    ("soudan", Some("sudan")),
    ("airija", Some("ireland")),
    (".", Some("unknown")),
    ("bw", Some("botswana")),
    ("equatorial guinea", Some("united states")),
    ("кипър", Some("cyprus")),
    ("camboya", Some("cambodia")),
    ("ss", Some("south sudan")),
    ("gu", Some("guam")),
    ("ai", Some("anguilla")),
    ("meksiko", Some("mexico")),
    ("saint vincent and the grenadines", Some("saint vincent and the grenadines")),
    ("китайская народная республика", Some("china")),
    ("オーストラリア", Some("australia")),
    ("γερμανία", Some("germany")),
    ("stato di palestina", Some("palestine")),
    ("prepared for siwin foods edmonton alberta t6b 3v2", Some("canada")),
    ("sierra-leone", Some("sierra leone")),
    ("maldive", Some("maldives")),
    ("pg", Some("united states")),
    ("united states of america", Some("united states")),
    ("monako", Some("monaco")),
    ("finlanda", Some("finland")),
    ("česká republika", Some("czech republic")),
    ("mn", Some("mongolia")),
    ("ευρωπαϊκή ένωση", Some("europe")),
    ("greenland", Some("denmark")),
    ("er", Some("eritrea")),
    ("обединени арабски емирства", Some("united arab emirates")),
    ("ルクセンブルク", Some("luxembourg")),
    ("アイルランド", Some("ireland")),
    ("ニュージーランド", Some("new zealand")),
    ("severní makedonie", Some("north macedonia")),
    ("ليتوانيا", Some("lithuania")),
    ("cipar", Some("cyprus")),
    ("sm", Some("san marino")),
    ("tunézia", Some("tunisia")),
    ("repubblica dominicana", Some("dominican republic")),
    ("colômbia", Some("colombia")),
    ("aw", Some("aruba")),
    ("sao tomé and príncipe", Some("sao tome and principe")),
    ("যুক্তরাজ্য", Some("united kingdom")),
    ("comoros", Some("comoros")),
    ("germa", Some("germany")),
    ("moldawien", Some("moldova")),
    ("малта", Some("malta")),
    ("hellas", Some("greece")),
    ("ug", Some("uganda")),
    ("ニューカレドニア", Some("australia")),
    ("aland-islands", Some("aland islands")),
    ("vi", Some("united states virgin islands")),
    ("rw", Some("rwanda")),
    ("sardinia", Some("italy")),
    ("японія", Some("japan")),
    ("mannin", Some("isle of man")),
    ("reeriaght unnaneysit", Some("united kingdom")),
    ("republica mexicana", Some("mexico")),
    ("republika południowej afryki", Some("south africa")),
    ("georgien", Some("georgia")),
    ("南アフリカ共和国", Some("south africa")),
    ("espagnol", Some("spanish")),
    ("ye", Some("yemen")),
    ("vatican city", Some("vatican city")),
    ("indonesien", Some("indonesia")),
    ("kn", Some("saint kitts and nevis")),
    ("bo", Some("bolivia")),
    ("en: españa", Some("spain")),
    ("северна македонија", Some("north macedonia")),
    ("албанија", Some("albania")),
    ("sy", Some("syria")),
    ("im", Some("isle of man")),
    ("beyaz rusya", Some("belarus")),
    ("nowa zelandia", Some("new zealand")),
    ("المجر", Some("hungary")),
    ("norga", Some("norway")),
    ("tjeckien", Some("czech republic")),
    ("eeuu", Some("united states")),
    ("birmania", Some("myanmar")),
    ("македонија", Some("north macedonia")),
    ("sd", Some("sudan")),
    ("ливан", Some("lebanon")),
    ("tasty foods αβγε", Some("greece")),
    ("камерун", Some("cameroon")),
    ("монгол улс", Some("mongolia")),
    ("mp", Some("northern mariana islands")),
    ("so", Some("somalia")),
    ("русия", Some("russia")),
    ("::", Some("unknown")),
    ("イラク", Some("iraq")),
    ("macedonia de nord", Some("north macedonia")),
    ("líbia", Some("libya")),
    ("japani", Some("japan")),
    ("vg", Some("british virgin islands")),
    ("ag", Some("antigua and barbuda")),
    ("中華人民共和国", Some("people's republic of china")),
    ("turkiye", Some("turkey")),
    ("ประเทศญี่ปุ่น", Some("japan")),
    ("indian subcontinent", Some("indian subcontinent")),
    ("エルサルバドル", Some("el salvador")),
    ("emirati arabi uniti", Some("united arab emirates")),
    ("saint-marin", Some("san marino")),
    ("british virgin islands", Some("british virgin islands")),
    ("tjekkiet", Some("czech republic")),
    ("意大利", Some("italy")),
    ("tonga", Some("tonga")),
    ("obala bjelokosti", Some("ivory coast")),
    ("wietnam", Some("vietnam")),
    ("jamaïque", Some("jamaica")),
    ("turks and caicos islands", Some("turks and caicos islands")),
    ("moçambique", Some("mozambique")),
    ("cc", Some("cocos (keeling) islands")),
    ("filipiny", Some("philippines")),
    ("kurdistan irakien", Some("iraqi kurdistan")),
    ("va", Some("vatican city")),
    ("servië", Some("serbia")),
    ("沙特阿拉伯", Some("saudi arabia")),
    ("zw", Some("zimbabwe")),
    ("mondo", Some("world")),
    ("macedonia del nord", Some("north macedonia")),
    ("sl", Some("sierra leone")),
    ("moldavië", Some("moldova")),
    ("нидерланды", Some("netherlands")),
    ("kp", Some("north korea")),
    ("iirimaa", Some("ireland")),
    ("egitto", Some("egypt")),
    ("islanti", Some("iceland")),
    ("na stàitean aonaichte", Some("united states")),
    ("bz", Some("belize")),
    ("belice", Some("belize")),
    ("bi", Some("burundi")),
    ("bellingham wa usa", Some("united states")),
    ("as", Some("american samoa")),
    ("الاردن", Some("jordan")),
    ("dm", Some("dominica")),
    ("ken", Some("kenya")),
    ("アラブ首長国連邦", Some("united arab emirates")),
    ("nyl", Some("unknown")),
    ("samoa", Some("samoa")),
    ("wit-rusland", Some("belarus")),
    ("txekia", Some("czech republic")),
    ("luxenburgo", Some("luxembourg")),
    ("индия", Some("india")),
    ("brazil france", Some("france")),
    ("dél-korea", Some("south korea")),
    ("bermudas", Some("bermuda")),
    ("īrija", Some("ireland")),
    ("coquitlam bc", Some("canada")),
    ("salwador", Some("el salvador")),
    ("amerika syarikat", Some("united states")),
    ("جميع البلدان", Some("all countries")),
    ("киргизия", Some("kyrgyzstan")),
    ("kuba", Some("cuba")),
    ("bih", Some("bosnia and herzegovina")),
    ("аржентина", Some("argentina")),
    ("молдова", Some("moldova")),
    ("indie", Some("india")),
    ("omán", Some("oman")),
    ("sudán del sur", Some("south sudan")),
    ("украйна", Some("ukraine")),
    ("дания", Some("denmark")),
    ("جنوب أفريقيا", Some("south africa")),
    ("japonsko", Some("japan")),
    ("армения", Some("armenia")),
    ("gm", Some("gambia")),
    ("fiyi", Some("fiji")),
    ("st", Some("são tomé and príncipe")),
    ("slov", Some("unknown")),
    ("šveice", Some("switzerland")),
    ("デンマーク", Some("denmark")),
    ("albanië", Some("albania")),
    ("tc", Some("turks and caicos islands")),
    ("الهند", Some("india")),
    ("maldivas", Some("maldives")),
    ("შვეიცარია", Some("switzerland")),
    ("ශ් රී ලංකාව", Some("sri lanka")),
    ("roemenie", Some("romania")),
    ("russian federation", Some("russia")),
    ("jordánsko", Some("jordan")),
    ("ভুটান", Some("bhutan")),
    ("ভারত", Some("india")),
    ("নেপাল", Some("nepal")),
    ("মার্কিন যুক্তরাষ্ট্র", Some("united states")),
    ("mw", Some("malawi")),
    ("y deyrnas unedig", Some("united kingdom")),
    ("ck", Some("cook islands")),
    ("монголия", Some("mongolia")),
    ("territorios palestinos", Some("palestine")),
    ("giappone", Some("japan")),
    ("ประเทศซาอุดีอาระเบีย", Some("saudi arabia")),
    ("éthiopie", Some("ethiopia")),
    ("эстония", Some("estonia")),
    ("польша", Some("poland")),
    ("kıbrıs cumhuriyeti", Some("cyprus")),
    ("vc", Some("saint vincent and the grenadines")),
    ("ireland & uk", Some("united kingdom")),
    ("yhdistyneet arabiemiirikunnat", Some("united arab emirates")),
    ("chint", Some("unknown")),
    ("малайзия", Some("malaysia")),
    ("egipt", Some("egypt")),
    ("malásia", Some("malaysia")),
    ("u.s. minor outlying islands", Some("united states")),
    ("leedu", Some("lithuania")),
    ("gruusia", Some("georgia")),
    ("république serbe de bosnie", Some("serbia")),
    ("япония", Some("japan")),
    ("romani", Some("romania")),
    ("afganistán", Some("afghanistan")),
    ("the-bahamas", Some("bahamas")),
    ("filippinene", Some("philippines")),
    ("ôsterreich", Some("austria")),
    ("spojené kráľovstvo", Some("united kingdom")),
    ("west africa", Some("west africa")),
    ("الأراضي الفلسطينية", Some("palestine")),
    ("νότια αφρική", Some("south africa")),
    ("tanzanie", Some("tanzania")),
    ("ประเทศมาเลเซีย", Some("malaysia")),
    ("jordanië", Some("jordan")),
    ("vatican", Some("vatican city")),
    ("sb", Some("solomon islands")),
    ("sz", Some("eswatini")),
    ("armenië", Some("armenia")),
    ("territori palestinesi", Some("palestine")),
    ("ประเทศฟิลิปปินส์", Some("philippines")),
    ("bg::bulgaria", Some("bulgaria")),
    ("läti", Some("latvia")),
    ("letland", Some("latvia")),
    ("велика британія", Some("ukraine")),
    ("тунис", Some("tunisia")),
    ("bosnië en herzegovina", Some("bosnia and herzegovina")),
    ("central america", Some("central america")),
    ("france 🇫🇷", Some("france")),
    ("urugwaj", Some("uruguay")),
    ("cocoa horizons", Some("unknown")),
    ("arab saudi", Some("saudi arabia")),
    ("british-indian-ocean-territory", Some("british indian ocean territory")),
    ("ruanda", Some("rwanda")),
    ("färöer", Some("faroe islands")),
    ("ijsland", Some("iceland")),
    ("færøerne", Some("faroe islands")),
    ("belanda", Some("netherlands")),
    ("korea selatan", Some("south korea")),
    ("nouvelle caledonie", Some("australia")),
    ("northern ireland", Some("united kingdom")),
    ("wales", Some("united kingdom")),
    ("antigua-and-barbuda", Some("antigua and barbuda")),
    ("ouganda", Some("uganda")),
    ("kroatija", Some("croatia")),
    ("etiopía", Some("ethiopia")),
    ("saint-kitts-and-nevis", Some("saint kitts and nevis")),
    ("nouvelle-aquitaine", Some("france")),
    ("virazeil", Some("france")),
    ("quebec", Some("canada")),
    ("the netherlands", Some("netherlands")),
    ("japonia", Some("japan")),
    ("word", Some("unknown")),
    ("aus", Some("australia")),
    ("беларусь", Some("belarus")),
    ("made in the u k (ni)", Some("united kingdom")),
    ("wa usa", Some("united states")),
    ("baden", Some("germany")),
    ("ouzbékistan", Some("uzbekistan")),
    ("dr congo", Some("democratic republic of the congo")),
    ("ariège", Some("france")),
    ("imported by mccormick canada", Some("canada")),
    ("on canada n6a 4z2", Some("canada")),
    ("vancouver canada", Some("canada")),
    ("vancouver bc canada", Some("canada")),
    ("product of usa. packed in canada. imported by: strong international trading inc. richmond bc | www.siti.ca", Some("canada")),
    ("rakúsko", Some("austria")),
    ("norwa", Some("norway")),
    ("马来西亚", Some("malaysia")),
    ("natural calm canada 5 idleswift dr. thornhill on l4j 1k6", Some("canada")),
    ("マダガスカル", Some("madagascar")),
    ("santo domingo", Some("dominican republic")),
    ("hoa kỳ", Some("united states")),
    ("svalbard et jan mayen", Some("norway")),
    ("europa", Some("europe")),
    ("corsica", Some("france")),
    ("الدمام", Some("damam")),
    ("dubai", Some("united arab emirates")),
    ("asia", Some("asia")),
    ("brasill", Some("brazil")),
    ("sicile", Some("sicily")),
    ("surrey bc canada", Some("canada")),
    ("italien", Some("italy")),
    ("germany", Some("germany")),
    ("france", Some("france")),
    ("united states", Some("united states")),
    ("irlande", Some("ireland")),
    ("united kingdom", Some("united kingdom")),
    ("états-unis", Some("united states")),
    ("canada", Some("canada")),
    ("suisse", Some("switzerland")),
    ("schweiz", Some("switzerland")),
    ("spain", Some("spain")),
    ("deutschland", Some("germany")),
    ("slovenia", Some("slovenia")),
    ("frankreich", Some("france")),
    ("netherlands", Some("netherlands")),
    ("switzerland", Some("switzerland")),
    ("de", Some("germany")),
    ("italy", Some("italy")),
    ("romania", Some("romania")),
    ("españa", Some("spain")),
    ("australia", Some("australia")),
    ("world", Some("world")),
    ("guadeloupe", Some("reunion")),
    ("república dominicana", Some("dominican republic")),
    ("estados unidos", Some("united states")),
    ("nederland", Some("netherlands")),
    ("bolivia", Some("bolivia")),
    ("méxico", Some("mexico")),
    ("new zealand", Some("new zealand")),
    ("sweden", Some("sweden")),
    ("alemania", Some("germany")),
    ("italia", Some("italy")),
    ("antarctic", Some("antarctica")),
    ("royaume-uni", Some("united kingdom")),
    ("belgique", Some("belgium")),
    ("pays-bas", Some("netherlands")),
    ("suède", Some("sweden")),
    ("denemark", Some("denmark")),
    ("norvège", Some("norway")),
    ("espagne", Some("spain")),
    ("pologne", Some("poland")),
    ("none", None),
    ("inde", Some("india")),
    ("autriche", Some("austria")),
    ("espagne", Some("spain")),
    ("united-kingdom", Some("united kingdom")),
    ("hongrie", Some("hungary")),
    ("république tchèque", Some("czech republic")),
    ("france", Some("france")),
    ("united-states", Some("united states")),
    ("république tchèque", Some("czech republic")),
    ("united-kingdom", Some("united kingdom")),
    ("thailande", Some("thailand")),
    ("états-unis", Some("united states")),
    ("egypte", Some("egypt")),
    ("états-unis", Some("united states")),
    ("territoires palestiniens", Some("palestine")),
    ("irlande", Some("ireland")),
    ("états-unis", Some("united states")),
    ("japon", Some("japan")),
    ("canada", Some("canada")),
    ("réunion", Some("france")),
    ("monde", Some("world")),
    ("france", Some("france")),
    ("croatie", Some("croatia")),
    ("irlande", Some("ireland")),
    ("allemagne", Some("germany")),
    ("états-unis", Some("united states")),
    ("suisse", Some("switzerland")),
    ("taiwan", Some("taiwan")),
    ("belgique", Some("belgium")),
    ("luxembourg", Some("luxembourg")),
    ("argentine", Some("argentina")),
    ("maroc", Some("morocco")),
    ("brésil", Some("brazil")),
    ("belgique", Some("belgium")),
    ("allemagne", Some("germany")),
    ("france", Some("france")),
    ("guatemala", Some("guatemala")),
    ("australie", Some("australia")),
    ("mexique", Some("mexico")),
    ("arabie saoudite", Some("saudi arabia")),
    ("arabie saoudite", Some("saudi arabia")),
    ("émirats arabes unis", Some("united arab emirates")),
    ("irak", Some("iraq")),
    ("koweït", Some("kuwait")),
    ("émirats arabes unis", Some("united arab emirates")),
    ("roumanie", Some("romania")),
    ("costa rica", Some("costa rica")),
    ("moldavie", Some("moldova")),
    ("martinique", Some("france")),
    ("new caledonia", Some("australia")),
    ("singapore", Some("singapore")),
    ("sverige", Some("sweden")),
    ("usa", Some("united states")),
    ("polynésie française", Some("french polynesia")),
    ("french polynesia", Some("french polynesia")),
    ("at", Some("austria")),
    ("suiza", Some("switzerland")),
    ("mexique", Some("mexico")),
    ("ch", Some("switzerland")),
    ("panamá", Some("panama")),
    ("nouvelle-calédonie", Some("france")),
    ("panama", Some("panama")),
    ("brazil", Some("brazil")),
    ("australien", Some("australia")),
    ("kanada", Some("canada")),
    ("russia", Some("russia")),
    ("vereinigtes königreich", Some("united kingdom")),
    ("países bajos", Some("netherlands")),
    ("norway", Some("norway")),
    ("reino unido", Some("united kingdom")),
    ("monde", Some("world")),
    ("yhdysvallat", Some("united states")),
    ("suomi", Some("finland")),
    ("made in canada from domestic and imported ingredients.", Some("canada")),
    ("regno unito", Some("united kingdom")),
    ("finland", Some("finland")),
    ("ประเทศฝรั่งเศส", Some("france")),
    ("สหราชอาณาจักร", Some("united kingdom")),
    ("法国", Some("france")),
    ("香港", Some("hong kong")),
    ("hong kong", Some("hong kong")),
    ("maurice", Some("mauritius")),
    ("ประเทศไทย (thai)", Some("thailand")),
    ("中华人民共和国", Some("china")),
    ("liban", Some("lebanon")),
    ("philippines", Some("philippines")),
    ("niederlande", Some("netherlands")),
    ("belgien", Some("belgium")),
    ("belgio", Some("belgium")),
    ("germania", Some("germany")),
    ("belgia", Some("belgium")),
    ("sveitsi", Some("switzerland")),
    ("saksa", Some("germany")),
    ("ranska", Some("france")),
    ("espanja", Some("spain")),
    ("yhdistynyt kuningaskunta", Some("united kingdom")),
    ("spagna", Some("spain")),
    ("malaysia", Some("malaysia")),
    ("guyana", Some("guyana")),
    ("hungary", Some("hungary")),
    ("mundo", Some("world")),
    ("canadá", Some("canada")),
    ("barbados", Some("barbados")),
    ("中華民國", Some("taiwan")),
    ("mexiko", Some("mexico")),
    ("saint kitts and nevis", Some("saint kitts and nevis")),
    ("us", Some("united states")),
    ("haïti", Some("haiti")),
    ("el salvador", Some("el salvador")),
    ("china", Some("china")),
    ("bahreïn", Some("bahrain")),
    ("italie", Some("italy")),
    ("serbia", Some("serbia")),
    ("フランス", Some("france")),
    ("colombia", Some("colombia")),
    ("réunion", Some("france")),
    ("lebanon", Some("lebanon")),
    ("oman", Some("oman")),
    ("corée du sud", Some("south korea")),
    ("trinidad and tobago", Some("trinidad and tobago")),
    ("sénégal", Some("senegal")),
    ("γαλλία", Some("france")),
    ("ελλάδα", Some("greece")),
    ("greece", Some("greece")),
    ("niemcy", Some("germany")),
    ("cuba", Some("cuba")),
    ("portugal", Some("portugal")),
    ("kuwait", Some("kuwait")),
    ("österreich", Some("austria")),
    ("französisch-polynesien", Some("french polynesia")),
    ("israël", Some("israel")),
    ("israel", Some("israel")),
    ("puerto rico", Some("puerto rico")),
    ("the bahamas", Some("bahamas")),
    ("en", Some("united kingdom")),
    ("polen", Some("poland")),
    ("schweden", Some("sweden")),
    ("aruba", Some("aruba")),
    ("polinesia francesa", Some("french polynesia")),
    ("美国", Some("united states")),
    ("uk", Some("united kingdom")),
    ("angola", Some("angola")),
    ("bolivie", Some("bolivia")),
    ("frança", Some("france")),
    ("maroc", Some("morocco")),
    ("アメリカ合衆国", Some("united states")),
    ("noruega", Some("norway")),
    ("dominican republic", Some("dominican republic")),
    ("wielka brytania", Some("united kingdom")),
    ("guinée", Some("united states")),
    ("jordan", Some("jordan")),
    ("burkina faso", Some("burkina faso")),
    ("it", Some("italy")),
    ("vietnam", Some("vietnam")),
    ("pakistan", Some("pakistan")),
    ("العراق", Some("iraq")),
    ("россия", Some("russia")),
    ("франция", Some("france")),
    ("българия", Some("bulgaria")),
    ("algérie", Some("algeria")),
    ("saint pierre and miquelon", Some("saint pierre and miquelon")),
    ("كندا", Some("canada")),
    ("saint-pierre-et-miquelon", Some("saint pierre and miquelon")),
    ("ascension island", Some("ascension island")),
    ("côte d'ivoire", Some("ivory coast")),
    ("jan mayen", Some("norway")),
    ("uruguay", Some("uruguay")),
    ("lb", Some("lebanon")),
    ("haiti", Some("haiti")),
    ("加拿大", Some("canada")),
    ("new-caledonia", Some("france")),
    ("gb", Some("united kingdom")),
    ("england", Some("united kingdom")),
    ("svizzera", Some("switzerland")),
    ("bélgica", Some("belgium")),
    ("russland", Some("russia")),
    ("mauritius", Some("mauritius")),
    ("indonésie", Some("indonesia")),
    ("arménie", Some("armenia")),
    ("瑞士", Some("switzerland")),
    ("autriche", Some("austria")),
    ("grecia", Some("greece")),
    ("grèce", Some("greece")),
    ("india", Some("india")),
    ("poland", Some("poland")),
    ("curaçao", Some("curaçao")),
    ("perancis", Some("france")),
    ("indonesia", Some("indonesia")),
    ("selandia baru", Some("new zealand")),
    ("swiss", Some("switzerland")),
    ("finnland", Some("finland")),
    ("polska", Some("poland")),
    ("südkorea", Some("south korea")),
    ("south africa", Some("south africa")),
    ("ecuador", Some("ecuador")),
    ("chile", Some("chile")),
    ("perú", Some("peru")),
    ("honduras", Some("honduras")),
    ("nicaragua", Some("nicaragua")),
    ("turkey", Some("turkey")),
    ("arabie saoudite", Some("saudi arabia")),
    ("spojené státy americké", Some("united states")),
    ("meksyk", Some("mexico")),
    ("émirats arabes unis", Some("united arab emirates")),
    ("croatia", Some("croatia")),
    ("cambodia", Some("cambodia")),
    ("neukaledonien", Some("france")),
    ("republik china", Some("china")),
    ("spojené království", Some("united kingdom")),
    ("guernsey", Some("guernsey")),
    ("mauricio", Some("mauritius")),
    ("singapour", Some("singapore")),
    ("european union", Some("europe")),
    ("jamaica", Some("jamaica")),
    ("denmark", Some("denmark")),
    ("luxemburg", Some("luxembourg")),
    ("hawaii", Some("united states")),
    ("german democratic republic", Some("germany")),
    ("corea del sur", Some("south korea")),
    ("tunisie", Some("tunisia")),
    ("soviet union", Some("russia")),
    ("algeria", Some("algeria")),
    ("jordanie", Some("jordan")),
    ("ประเทศสวิตเซอร์แลนด์", Some("switzerland")),
    ("fr  €", Some("france")),
    ("hongkong", Some("hong kong")),
    ("verenigde staten van amerika", Some("united states")),
    ("ηνωμένο βασίλειο", Some("united kingdom")),
    ("république démocratique du congo", Some("democratic republic of the congo")),
    ("tunísia", Some("tunisia")),
    ("togo", Some("togo")),
    ("qatar", Some("qatar")),
    ("dinamarca", Some("denmark")),
    ("guyane", Some("french guiana")),
    ("union européenne", Some("europe")),
    ("bulgaria", Some("bulgaria")),
    ("zjednoczone królestwo", Some("united kingdom")),
    ("somalía", Some("somalia")),
    ("unión europea", Some("europe")),
    ("líbano", Some("lebanon")),
    ("belgië", Some("belgium")),
    ("peru", Some("peru")),
    ("luxemburgo", Some("luxembourg")),
    ("zwitserland", Some("switzerland")),
    ("jordanien", Some("jordan")),
    ("تونس", Some("tunisia")),
    ("république tchèque", Some("czech republic")),
    ("românia", Some("romania")),
    ("saint-pierre und miquelon", Some("saint pierre and miquelon")),
    ("égypte", Some("egypt")),
    ("monaco", Some("monaco")),
    ("cyprus", Some("cyprus")),
    ("الجزائر", Some("algeria")),
    ("vezuela", Some("venezuela")),
    ("finlande", Some("finland")),
    ("日本", Some("japan")),
    ("afrique du sud", Some("south africa")),
    ("cayman islands", Some("cayman islands")),
    ("الإمارات العربية المتحدة", Some("united arab emirates")),
    ("irlanda", Some("ireland")),
    ("paraguay", Some("paraguay")),
    ("denemarken", Some("denmark")),
    ("italië", Some("italy")),
    ("noorwegen", Some("norway")),
    ("spanje", Some("spain")),
    ("zweden", Some("sweden")),
    ("لبنان", Some("lebanon")),
    ("فرنسا", Some("france")),
    ("cameroon", Some("cameroon")),
    ("mongolia", Some("mongolia")),
    ("irland", Some("ireland")),
    ("myanmar", Some("myanmar")),
    ("marruecos", Some("morocco")),
    ("भारत", Some("india")),
    ("senegal", Some("senegal")),
    ("tchad", Some("chad")),
    ("suriname", Some("suriname")),
    ("bulgarie", Some("bulgaria")),
    ("albania", Some("albania")),
    ("chili", Some("chile")),
    ("norwegen", Some("norway")),
    ("cameroun", Some("cameroon")),
    ("virgin islands of the united states", Some("united states")),
    ("japón", Some("japan")),
    ("الولايات المتحدة", Some("united states")),
    ("bangladesh", Some("bangladesh")),
    ("australië", Some("australia")),
    ("nieuw-zeeland", Some("new zealand")),
    ("slowakije", Some("slovakia")),
    ("dominica", Some("dominica")),
    ("méxico", Some("mexico")),
    ("suecia", Some("sweden")),
    ("бельгия", Some("belgium")),
    ("nigeria", Some("nigeria")),
    ("mađarska", Some("hungary")),
    ("italija", Some("italy")),
    ("poljska", Some("poland")),
    ("japon", Some("japan")),
    ("বাংলাদেশ", Some("bangladesh")),
    ("włochy", Some("italy")),
    ("hiszpania", Some("spain")),
    ("szwajcaria", Some("switzerland")),
    ("frankrike", Some("france")),
    ("lotyšsko", Some("latvia")),
    ("litva", Some("lithuania")),
    ("polsko", Some("poland")),
    ("djibouti", Some("djibouti")),
    ("dänemark", Some("denmark")),
    ("tyskland", Some("germany")),
    ("finlândia", Some("finland")),
    ("espanha", Some("spain")),
    ("suécia", Some("sweden")),
    ("lithuania", Some("lithuania")),
    ("suíça", Some("switzerland")),
    ("south korea", Some("south korea")),
    ("švedska", Some("sweden")),
    ("německo", Some("germany")),
    ("islande", Some("iceland")),
    ("grécia", Some("greece")),
    ("itália", Some("italy")),
    ("polónia", Some("poland")),
    ("hongrie", Some("hungary")),
    ("serbie", Some("serbia")),
    ("союз советских социалистических республик", Some("ussr")),
    ("brésil", Some("brazil")),
    ("ukraine", Some("ukraine")),
    ("ísland", Some("iceland")),
    ("türkiye", Some("turkey")),
    ("madagascar", Some("madagascar")),
    ("macau", Some("macau")),
    ("franța", Some("france")),
    ("україна", Some("ukraine")),
    ("latvia", Some("latvia")),
    ("estonia", Some("estonia")),
    ("германия", Some("germany")),
    ("швейцария", Some("switzerland")),
    ("duitsland", Some("germany")),
    ("südafrika", Some("south africa")),
    ("bulharsko", Some("bulgaria")),
    ("czech-republic", Some("czech republic")),
    ("nizozemsko", Some("netherlands")),
    ("austrija", Some("austria")),
    ("alemanha", Some("germany")),
    ("áustria", Some("austria")),
    ("némorszag", Some("hungary")),
    ("kroatien", Some("croatia")),
    ("csehország", Some("czech republic")),
    ("lengyelország", Some("poland")),
    ("svédország", Some("sweden")),
    ("rumania", Some("romania")),
    ("ungarn", Some("hungary")),
    ("países baixos", Some("netherlands")),
    ("австрия", Some("austria")),
    ("финландия", Some("finland")),
    ("швеция", Some("sweden")),
    ("bulgarien", Some("bulgaria")),
    ("tschechien", Some("czech republic")),
    ("slowakei", Some("slovakia")),
    ("slowenien", Some("slovenia")),
    ("lituania", Some("lithuania")),
    ("испания", Some("spain")),
    ("república checa", Some("czech republic")),
    ("marrocos", Some("morocco")),
    ("полша", Some("poland")),
    ("румъния", Some("romania")),
    ("сърбия", Some("serbia")),
    ("хърватия", Some("croatia")),
    ("ungheria", Some("hungary")),
    ("storbritannien", Some("united kingdom")),
    ("rumänien", Some("romania")),
    ("finlandia", Some("finland")),
    ("polonia", Some("poland")),
    ("италия", Some("italy")),
    ("украина", Some("ukraine")),
    ("белгия", Some("belgium")),
    ("griechenland", Some("greece")),
    ("alankomaat", Some("netherlands")),
    ("olaszország", Some("hungary")),
    ("románia", Some("romania")),
    ("danmark", Some("denmark")),
    ("amerikai egyesült államok", Some("united states")),
    ("ruotsi", Some("finland")),
    ("tanska", Some("denmark")),
    ("paesi bassi", Some("netherlands")),
    ("france switzerland germany", Some("france")),
    ("nederländerna", Some("sweden")),
    ("унгария", Some("hungary")),
    ("nizozemska", Some("netherlands")),
    ("španjolska", Some("spain")),
    ("ujedinjeno kraljevstvo", Some("united kingdom")),
    ("espanya", Some("spain")),
    ("regne unit", Some("united kingdom")),
    ("norwegia", Some("norway")),
    ("hongarije", Some("hungary")),
    ("češka", Some("czech republic")),
    ("slovačka", Some("slovakia")),
    ("lu", Some("luxembourg")),
    ("república da irlanda", Some("ireland")),
    ("švédsko", Some("sweden")),
    ("rakousko", Some("austria")),
    ("serbien", Some("serbia")),
    ("czechy", Some("czech republic")),
    ("litwa", Some("lithuania")),
    ("holandia", Some("netherlands")),
    ("słowacja", Some("slovakia")),
    ("itálie", Some("italy")),
    ("prancūzija", Some("france")),
    ("vokietija", Some("germany")),
    ("šveicarija", Some("switzerland")),
    ("lietuva", Some("lithuania")),
    ("slovensko", Some("slovakia")),
    ("croácia", Some("croatia")),
    ("sérvia", Some("serbia")),
    ("eslováquia", Some("slovakia")),
    ("eslovénia", Some("slovenia")),
    ("birleşik krallık", Some("united kingdom")),
    ("slovakia", Some("slovakia")),
    ("republik zypern", Some("cyprus")),
    ("bułgaria", Some("bulgaria")),
    ("eslovenia", Some("slovenia")),
    ("bulgária", Some("bulgaria")),
    ("hungria", Some("hungary")),
    ("roménia", Some("romania")),
    ("puola", Some("poland")),
    ("slovenija", Some("slovenia")),
    ("srbija", Some("serbia")),
    ("bugarska", Some("bulgaria")),
    ("svezia", Some("sweden")),
    ("nouvelle-zélande", Some("new zealand")),
    ("görögország", Some("greece")),
    ("belgicko", Some("belgium")),
    ("francúzsko", Some("france")),
    ("nemecko", Some("germany")),
    ("rusko", Some("russia")),
    ("croatie", Some("croatia")),
    ("croacia", Some("croatia")),
    ("hungría", Some("hungary")),
    ("švýcarsko", Some("switzerland")),
    ("dania", Some("denmark")),
    ("grecja", Some("greece")),
    ("szwecja", Some("sweden")),
    ("albanien", Some("albania")),
    ("estonija", Some("estonia")),
    ("latvija", Some("latvia")),
    ("švajčiarsko", Some("switzerland")),
    ("oostenrijk", Some("austria")),
    ("united kingdom & ireland", Some("united kingdom")),
    ("eslovaquia", Some("slovakia")),
    ("słowenia", Some("slovenia")),
    ("francija", Some("france")),
    ("moldova", Some("moldova")),
    ("malta", Some("malta")),
    ("съединени американски щати", Some("united states")),
    ("обединено кралство великобритания и северна ирландия", Some("united kingdom")),
    ("slovénie", Some("slovenia")),
    ("rumunsko", Some("romania")),
    ("tsjechië", Some("czech republic")),
    ("slovacchia", Some("slovakia")),
    ("slovaquie", Some("slovakia")),
    ("łotwa", Some("latvia")),
    ("lituânia", Some("lithuania")),
    ("maďarsko", Some("hungary")),
    ("španělsko", Some("spain")),
    ("gabon", Some("gabon")),
    ("španielsko", Some("spain")),
    ("belgija", Some("belgium")),
    ("grčka", Some("greece")),
    ("србија", Some("serbia")),
    ("ie", Some("ireland")),
    ("frankrig", Some("denmark")),
    ("rumunjska", Some("romania")),
    ("portogallo", Some("portugal")),
    ("إيطاليا", Some("italy")),
    ("чехия", Some("czech republic")),
    ("republika srpska", Some("bosnia and herzegovina")),
    ("cn", Some("china")),
    ("chine", Some("china")),
    ("austrália", Some("australia")),
    ("iran", Some("iran")),
    ("algerien", Some("algeria")),
    ("nederlân", Some("netherlands")),
    ("pérou", Some("peru")),
    ("švica", Some("switzerland")),
    ("スペイン", Some("spain")),
    ("kína", Some("china")),
    ("ausztria", Some("austria")),
    ("bèlgica", Some("belgium")),
    ("belgie", Some("belgium")),
    ("austrálie", Some("australia")),
    ("대한민국", Some("south korea")),
    ("french guiana", Some("french guiana")),
    ("re", Some("reunion")),
    ("af", Some("afghanistan")),
    ("argelia", Some("algeria")),
    ("argentine", Some("argentina")),
    ("colombie", Some("colombia")),
    ("russie", Some("russia")),
    ("mali", Some("mali")),
    ("martinica", Some("martinique")),
    ("reunión", Some("reunion")),
    ("reunion", Some("reunion")),
    ("jp", Some("japan")),
    ("guadalupe", Some("reunion")),
    ("cote-d-ivoire", Some("ivory coast")),
    ("казахстан", Some("kazakhstan")),
    ("afghanistan", Some("afghanistan")),
    ("saint-martin", Some("saint martin")),
    ("marocco", Some("morocco")),
    ("biélorussie", Some("belarus")),
    ("mq", Some("martinique")),
    ("kazakhstan", Some("kazakhstan")),
    ("marokko", Some("morocco")),
    ("tunisia", Some("tunisia")),
    ("république du congo", Some("republic of the congo")),
    ("maroko", Some("morocco")),
    ("mayotte", Some("mayotte")),
    ("estonie", Some("estonia")),
    ("french-polynesia", Some("french polynesia")),
    ("thaïlande", Some("thailand")),
    ("австралия", Some("australia")),
    ("мароко", Some("morocco")),
    ("нова зеландия", Some("new zealand")),
    ("estónia", Some("estonia")),
    ("andorra", Some("andorra")),
    ("nova zelândia", Some("new zealand")),
    ("rússia", Some("russia")),
    ("tailandia", Some("thailand")),
    ("ประเทศออสเตรเลีย", Some("australia")),
    ("ประเทศออสเตรีย", Some("austria")),
    ("ประเทศเบลเยียม", Some("belgium")),
    ("ประเทศเยอรมนี", Some("germany")),
    ("ประเทศอิตาลี", Some("italy")),
    ("ประเทศเลบานอน", Some("lebanon")),
    ("ประเทศโมร็อกโก", Some("morocco")),
    ("ประเทศโรมาเนีย", Some("romania")),
    ("ประเทศสเปน", Some("spain")),
    ("åland islands", Some("finland")),
    ("bielorussia", Some("belarus")),
    ("frakland", Some("france")),
    ("#value!", None),
    ("nl", Some("netherlands")),
    ("koeweit", Some("kuwait")),
    ("dom tom", Some("france")),
    ("алжир", Some("algeria")),
    ("reunião", Some("reunion")),
    ("dom-tom", Some("france")),
    ("ประเทศรัสเซีย", Some("russia")),
    ("สหรัฐอเมริกา", Some("united states")),
    ("sg", Some("singapore")),
    ("svájc", Some("switzerland")),
    ("латвия", Some("latvia")),
    ("грузия", Some("georgia")),
    ("nueva caledonia", Some("australia")),
    ("ru", Some("russia")),
    ("seychelles", Some("seychelles")),
    ("costa de marfil", Some("ivory coast")),
    ("sjedinjene američke države", Some("united states")),
    ("danska", Some("denmark")),
    ("rusija", Some("russia")),
    ("burkina-faso", Some("burkina faso")),
    ("norge", Some("norway")),
    ("li", Some("liechtenstein")),
    ("реюнион", Some("reunion")),
    ("lussemburgo", Some("luxembourg")),
    ("vanuatu", Some("vanuatu")),
    ("roemenië", Some("romania")),
    ("rumunia", Some("romania")),
    ("ma", Some("morocco")),
    ("viêt nam", Some("vietnam")),
    ("albanie", Some("albania")),
    ("argélia", Some("algeria")),
    ("pas", None),
    ("kh", Some("cambodia")),
    ("الأردن", Some("jordan")),
    ("mf", Some("saint martin")),
    ("french-guiana", Some("french guiana")),
    ("mongolie", Some("mongolia")),
    ("gp", Some("reunion")),
    ("französisch-guayana", Some("french guiana")),
    ("nuova caledonia", Some("australia")),
    ("france la réunion", Some("reunion")),
    ("сенегал", Some("senegal")),
    ("cambodge", Some("cambodia")),
    ("jersey", Some("jersey")),
    ("france 🇨🇵🇫🇷", Some("france")),
    ("gf", Some("french guiana")),
    ("angleterre", Some("england")),
    ("andorre", Some("andorra")),
    ("irak", Some("iraq")),
    ("emirats arabes unis", Some("united arab emirates")),
    ("democratic republic of the congo", Some("democratic republic of the congo")),
    ("bulgarije", Some("bulgaria")),
    ("griekenland", Some("greece")),
    ("république dominicaine", Some("dominican republic")),
    ("spania", Some("spain")),
    ("nc", Some("australia")),
    ("ucrania", Some("ukraine")),
    ("welt", Some("world")),
    ("liechtenstein", Some("liechtenstein")),
    ("estland", Some("estonia")),
    ("hollande", Some("netherlands")),
    ("turquie", Some("turkey")),
    ("mauritanie", Some("mauritania")),
    ("iceland", Some("iceland")),
    ("сингапур", Some("singapore")),
    ("szerbia", Some("serbia")),
    ("srbsko", Some("serbia")),
    ("georgia", Some("georgia")),
    ("ungaria", Some("hungary")),
    ("avstrija", Some("austria")),
    ("hrvaška", Some("croatia")),
    ("republika srbska", Some("bosnia and herzegovina")),
    ("bosna in hercegovina", Some("bosnia and herzegovina")),
    ("črna gora", Some("montenegro")),
    ("bosna i hercegovina", Some("bosnia and herzegovina")),
    ("sjeverna makedonija", Some("north macedonia")),
    ("albanija", Some("albania")),
    ("saudijska arabija", Some("saudi arabia")),
    ("republic of macedonia", Some("north macedonia")),
    ("bosnia and herzegovina", Some("bosnia and herzegovina")),
    ("montenegro", Some("montenegro")),
    ("nordmazedonien", Some("north macedonia")),
    ("szlovákia", Some("slovakia")),
    ("француска", Some("france")),
    ("босна и херцеговина", Some("bosnia and herzegovina")),
    ("crna gora", Some("montenegro")),
    ("црна гора", Some("montenegro")),
    ("nya kaledonien", Some("australia")),
    ("singapur", Some("singapore")),
    ("русија", Some("russia")),
    ("prantsusmaa", Some("france")),
    ("hispaania", Some("spain")),
    ("eesti", Some("estonia")),
    ("saksamaa", Some("germany")),
    ("dánsko", Some("denmark")),
    ("chińska republika ludowa", Some("china")),
    ("нидерландия", Some("netherlands")),
    ("estija", Some("estonia")),
    ("suomija", Some("finland")),
    ("rumunija", Some("romania")),
    ("švedija", Some("sweden")),
    ("jungtinė karalystė", Some("united kingdom")),
    ("chipre", Some("cyprus")),
    ("κύπρος", Some("cyprus")),
    ("белоруссия", Some("belarus")),
    ("bělorusko", Some("belarus")),
    ("argentinien", Some("argentina")),
    ("saudi-arabien", Some("saudi arabia")),
    ("イギリス", Some("united kingdom")),
    ("bahrain", Some("bahrain")),
    ("deutsche demokratische republik", Some("east germany")),
    ("немачка", Some("germany")),
    ("німеччина", Some("germany")),
    ("польща", Some("poland")),
    ("węgry", Some("hungary")),
    ("north macedonia", Some("north macedonia")),
    ("swaziland", Some("eswatini")),
    ("elveția", Some("switzerland")),
    ("macédoine du nord", Some("north macedonia")),
    ("east germany", Some("germany")),
    ("chypre", Some("cyprus")),
    ("بلجيكا", Some("belgium")),
    ("ألمانيا", Some("germany")),
    ("island", Some("iceland")),
    ("alemanya", Some("germany")),
    ("ليبيا", Some("libya")),
    ("росія", Some("russia")),
    ("unkari", Some("hungary")),
    ("lucembursko", Some("luxembourg")),
    ("chorvatsko", Some("croatia")),
    ("rusland", Some("russia")),
    ("no", Some("norway")),
    ("danimarca", Some("denmark")),
    ("kosovo", Some("kosovo")),
    ("bolivien", Some("bolivia")),
    ("deut", Some("germany")),
    ("rusia", Some("russia")),
    ("belarus", Some("belarus")),
    ("kyrgyzstan", Some("kyrgyzstan")),
    ("tajikistan", Some("tajikistan")),
    ("uzbekistan", Some("uzbekistan")),
    ("armenia", Some("armenia")),
    ("азербайджан", Some("azerbaijan")),
    ("azerbaijan", Some("azerbaijan")),
    ("australija", Some("australia")),
    ("lettonie", Some("latvia")),
    ("lettland", Some("latvia")),
    ("fransa", Some("france")),
    ("aserbaidschan", Some("azerbaijan")),
    ("lituanie", Some("lithuania")),
    ("jungtinės amerikos valstijos", Some("united states")),
    ("sri lanka", Some("sri lanka")),
    ("เขตบริหารพิเศษฮ่องกง", Some("hong kong")),
    ("นิวแคลิโดเนีย", Some("australia")),
    ("neuseeland", Some("new zealand")),
    ("таджикистан", Some("tajikistan")),
    ("франція", Some("france")),
    ("латвія", Some("latvia")),
    ("ucrânia", Some("ukraine")),
    ("ucraina", Some("ukraine")),
    ("republica moldova", Some("moldova")),
    ("moldavie", Some("moldova")),
    ("géorgie", Some("georgia")),
    ("საქართველო", Some("georgia")),
    ("hong-kong", Some("hong kong")),
    ("قطر", Some("qatar")),
    ("中華民国", Some("taiwan")),
    ("澳门", Some("macau")),
    ("mozambique", Some("mozambique")),
    ("arabia saudita", Some("saudi arabia")),
    ("ישראל", Some("israel")),
    ("irlandia", Some("ireland")),
    ("zjednoczone emiraty arabskie", Some("united arab emirates")),
    ("norja", Some("norway")),
    ("المملكة المتحدة", Some("united kingdom")),
    ("المغرب", Some("morocco")),
    ("republic of ireland", Some("ireland")),
    ("europäische union", Some("europe")),
    ("franciaország", Some("france")),
    ("spanien", Some("spain")),
    ("česko", Some("czech republic")),
    ("francie", Some("france")),
    ("nagy-britannia", Some("united kingdom")),
    ("magyarország", Some("hungary")),
    ("frankrijk", Some("france")),
    ("verenigd koninkrijk", Some("united kingdom")),
    ("vereinigte staaten von amerika", Some("united states")),
    ("la réunion", Some("reunion")),
    ("svijet", Some("world")),
    ("francuska", Some("france")),
    ("hrvatska", Some("croatia")),
    ("irska", Some("ireland")),
    ("njemačka", Some("europe")),
    ("sjedinjene-američke-države", Some("united states")),
    ("švicarska", Some("switzerland")),
    ("stati uniti d'america", Some("united states")),
    ("saint kitts and nevis", Some("united states")),
    ("el salvador", Some("salvador")),
    ("emiratos árabes unidos", Some("united arab emirates")),
    ("francja", Some("france")),
    ("stany zjednoczone", Some("united states")),
    ("brasil", Some("brazil")),
    ("guernsey", Some("united kingdom")),
    ("french guiana", Some("united states")),
    ("saint pierre and miquelon", Some("united states")),
    ("trinidad and tobago", Some("united states")),
    ("mŕxico", Some("mexico")),
    ("latvia", Some("lithuania")),
    ("ussr", Some("russia")),
    ("macau", Some("china")),
    ("németország", Some("germany")),
    ("litauen", Some("lithuania")),
    ("saint martin", Some("reunion")),
    ("guadeloupe", Some("reunion")),
    ("republic of the congo", Some("democratic republic of the congo")),
    ("mayotte", Some("reunion")),
    ("new caledonia", Some("australia")),
    ("seychelles", Some("reunion")),
    ("liechtenstein", Some("switzerland")),
    ("france - la réunion", Some("reunion")),
    ("jersey", Some("united kingdom")),
    ("england", Some("united kingdom")),
    ("madagascar", Some("reunion")),
    ("east germany", Some("germany")),
    ("bangladesh", Some("india")),
    ("francia  españa", Some("france")),
    ("france  spain", Some("france")),
    ("palestinian territories", Some("palestine")),
    ("europäische union", Some("europe")),
    ("soviet union", Some("russia")),
    ("republic of ireland", Some("ireland")),
    ("middle east:", Some("romania")),
    ("saint", Some("united states")),
    ("papua new guinea", Some("united states")),
    ("канада", Some("canada")),
    ("south america", Some("peru")),
    ("zimbabwe", Some("reunion")),
    ("america", Some("united states")),
    ("product of usa. packed in canada.  imported by: strong international trading inc. richmond bc | www.siti.ca", Some("united states")),
    ("natural calm canada 5 idleswift dr.  thornhill on  l4j 1k6", Some("canada")),
];
